use serde::Deserialize;

use crate::models::UserCreationRequest;
use crate::utils::{parse_group_list, parse_yes_flag};

/// Header columns a batch file must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "email",
    "password",
    "groups",
    "must_change_password",
    "send_welcome_email",
];

/// One raw record of the batch CSV, before any normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsvUserRow {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub groups: String,
    #[serde(default)]
    pub must_change_password: String,
    #[serde(default)]
    pub send_welcome_email: String,
}

impl CsvUserRow {
    /// Trim the text fields and derive the typed creation request.
    pub fn to_request(&self) -> UserCreationRequest {
        UserCreationRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
            groups: parse_group_list(&self.groups),
            must_change_password: parse_yes_flag(&self.must_change_password),
            send_welcome_email: parse_yes_flag(&self.send_welcome_email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(groups: &str, must_change: &str, welcome: &str) -> CsvUserRow {
        CsvUserRow {
            name: "  Alice ".into(),
            email: " alice@example.com".into(),
            password: "pw ".into(),
            groups: groups.into(),
            must_change_password: must_change.into(),
            send_welcome_email: welcome.into(),
        }
    }

    #[test]
    fn test_to_request_trims_and_parses() {
        let req = row("[2,3]", "yes", "no").to_request();
        assert_eq!(req.name, "Alice");
        assert_eq!(req.email, "alice@example.com");
        assert_eq!(req.password, "pw");
        assert_eq!(req.groups, vec![2, 3]);
        assert!(req.must_change_password);
        assert!(!req.send_welcome_email);
    }

    #[test]
    fn test_to_request_defaults_groups() {
        let req = row("", " YES ", "").to_request();
        assert_eq!(req.groups, vec![1]);
        assert!(req.must_change_password);
        assert!(!req.send_welcome_email);
    }
}
