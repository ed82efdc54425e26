// Console output: comfy-table reports and coloured diagnostics
pub mod console;
pub mod tables;

pub use console::{announce_creation, print_error, report_api_error, report_unreadable_row};
pub use tables::{creation_report_table, groups_table, print_table, users_table};
