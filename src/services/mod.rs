pub mod batch_service;
pub mod directory_service;

// Re-export commonly used functions
pub use batch_service::{
    check_input_file, create_users, create_users_from_csv, read_rows, BatchError, BatchReport,
    RowResult,
};
pub use directory_service::{fetch_groups, fetch_users, load_directory, Directory};
