//! Bulk account creation from a CSV file.
//!
//! Rows are sent strictly one after another and every row yields exactly one
//! outcome, in file order.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::{create_user, GraphQlClient};
use crate::models::{CsvUserRow, UserCreationOutcome, REQUIRED_COLUMNS};
use crate::output;

/// Errors that stop a batch before any account is created
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// A decoded CSV record, or the reason it could not be decoded.
pub type RowResult = Result<CsvUserRow, String>;

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub outcomes: Vec<UserCreationOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

pub fn check_input_file(path: &Path) -> Result<(), BatchError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(BatchError::NotFound(path.to_path_buf()))
    }
}

/// Read every record after validating the header.
///
/// A header lacking any required column fails the whole read. Individual
/// records that cannot be decoded are kept as `Err` so the caller can report
/// them in place.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RowResult>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BatchError::MissingColumns(missing));
    }

    Ok(rdr
        .deserialize::<CsvUserRow>()
        .map(|r| r.map_err(|e| e.to_string()))
        .collect())
}

/// Create one account per row, sequentially, and collect the outcomes.
pub async fn create_users(client: &GraphQlClient, rows: Vec<RowResult>) -> BatchReport {
    let mut outcomes = Vec::with_capacity(rows.len());

    for (idx, row) in rows.into_iter().enumerate() {
        let row_number = idx + 1;
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(row = row_number, error = %e, "Unreadable CSV row");
                output::report_unreadable_row(row_number, &e);
                outcomes.push(UserCreationOutcome::unreadable(row_number));
                continue;
            }
        };

        let request = row.to_request();
        output::announce_creation(&request);

        let outcome = match create_user(client, &request).await {
            Ok(payload) => {
                let id = payload.user.map(|u| u.id);
                tracing::info!(email = %request.email, ?id, "User created");
                UserCreationOutcome::succeeded(&request, id)
            }
            Err(e) => {
                tracing::warn!(email = %request.email, error = %e, "User creation failed");
                output::report_api_error(&e);
                UserCreationOutcome::failed(&request)
            }
        };
        outcomes.push(outcome);
    }

    BatchReport { outcomes }
}

/// Check the file, read it and run the batch.
pub async fn create_users_from_csv(
    client: &GraphQlClient,
    path: &Path,
) -> Result<BatchReport, BatchError> {
    check_input_file(path)?;
    let rows = read_rows(File::open(path)?)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded batch file");
    Ok(create_users(client, rows).await)
}
