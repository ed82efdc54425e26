use std::fmt;

use crate::models::UserCreationRequest;

/// Shown in the ID column when the server did not report an id.
pub const UNKNOWN_ID: &str = "Unknown";
/// Shown in the ID column for rows that failed.
pub const FAILED_ID: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Succeeded,
    Failed,
}

impl OutcomeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeStatus::Succeeded => "🟢 Success",
            OutcomeStatus::Failed => "🔴 Failed",
        }
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the creation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreationOutcome {
    pub id: String,
    pub name: String,
    pub email: String,
    pub groups: String,
    pub status: OutcomeStatus,
}

impl UserCreationOutcome {
    pub fn succeeded(request: &UserCreationRequest, id: Option<i64>) -> Self {
        Self {
            id: id.map(|i| i.to_string()).unwrap_or_else(|| UNKNOWN_ID.to_string()),
            name: request.name.clone(),
            email: request.email.clone(),
            groups: request.groups_display(),
            status: OutcomeStatus::Succeeded,
        }
    }

    pub fn failed(request: &UserCreationRequest) -> Self {
        Self {
            id: FAILED_ID.to_string(),
            name: request.name.clone(),
            email: request.email.clone(),
            groups: request.groups_display(),
            status: OutcomeStatus::Failed,
        }
    }

    /// Outcome for a CSV record that could not be decoded at all.
    pub fn unreadable(row_number: usize) -> Self {
        Self {
            id: FAILED_ID.to_string(),
            name: format!("(row {})", row_number),
            email: String::new(),
            groups: String::new(),
            status: OutcomeStatus::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Succeeded
    }
}
