// Parsing utilities
pub mod parse_flag;
pub mod parse_group_list;

// Display utilities
pub mod format_datetime;

// Re-export all utilities for convenient access
pub use parse_flag::parse_yes_flag;
pub use parse_group_list::{parse_group_list, DEFAULT_GROUP_ID};
pub use format_datetime::format_datetime;
