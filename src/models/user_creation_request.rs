use serde::Serialize;
use serde_json::Value;

/// Variables for the `users.create` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreationRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "passwordRaw")]
    pub password: String,
    pub groups: Vec<i64>,
    pub must_change_password: bool,
    pub send_welcome_email: bool,
}

impl UserCreationRequest {
    /// GraphQL variables object for this request.
    pub fn variables(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Groups as shown in reports, e.g. `2, 3`.
    pub fn groups_display(&self) -> String {
        self.groups
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
