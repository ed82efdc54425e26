//! Administrative command-line tools for a Wiki.js instance.
//!
//! `create-users` creates accounts in bulk from a CSV file, `get-users`
//! prints the current users and groups. Both talk to the Wiki.js GraphQL API
//! through [`api::GraphQlClient`].

pub mod api;
pub mod config;
pub mod models;
pub mod output;
pub mod services;
pub mod utils;
