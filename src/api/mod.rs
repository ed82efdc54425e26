// GraphQL API modules
pub mod client;
pub mod error;
pub mod groups;
pub mod users;

// Re-export commonly used items
pub use client::{mask_secrets, set_silent, GraphQlClient};
pub use error::ApiError;
pub use groups::list_groups;
pub use users::{create_user, list_users};
