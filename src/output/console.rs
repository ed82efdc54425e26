use yansi::Paint;

use crate::api::{mask_secrets, ApiError};
use crate::models::UserCreationRequest;

pub fn print_error(message: &str) {
    eprintln!("{}", Paint::new(message).red().bold());
}

/// Line printed before each creation request.
pub fn announce_creation(request: &UserCreationRequest) {
    println!(
        "\n{} {} ({}) - {}: [{}]",
        Paint::new("Creating user:").cyan(),
        request.name,
        request.email,
        Paint::new("groups").dim(),
        request.groups_display()
    );
}

pub fn report_unreadable_row(row_number: usize, detail: &str) {
    eprintln!(
        "{} {}: {}",
        Paint::new("Skipping unreadable row").red().bold(),
        row_number,
        detail
    );
}

/// Print an API failure; GraphQL and creation errors also show the variables
/// that were sent, with the password masked.
pub fn report_api_error(error: &ApiError) {
    match error {
        ApiError::GraphQl { message, variables } => {
            eprintln!("{} {}", Paint::new("API error:").red().bold(), message);
            print_sent_variables(variables.as_ref());
        }
        ApiError::Rejected { message, variables } => {
            eprintln!("{} {}", Paint::new("Creation failed:").red().bold(), message);
            print_sent_variables(variables.as_ref());
        }
        ApiError::Request(_) | ApiError::Status { .. } => {
            eprintln!("{} {}", Paint::new("Request error:").red().bold(), error);
        }
        ApiError::Decode(_) => {
            eprintln!("{} {}", Paint::new("Unexpected response:").red().bold(), error);
        }
    }
}

fn print_sent_variables(variables: Option<&serde_json::Value>) {
    if let Some(v) = variables {
        eprintln!(
            "{} {}",
            Paint::new("Request sent:").yellow().bold(),
            serde_json::to_string(&mask_secrets(v)).unwrap_or_default()
        );
    }
}
