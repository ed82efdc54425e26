//! Wire schemas for the GraphQL envelope and the operations this crate issues.

use serde::Deserialize;

use crate::models::{GroupRecord, UserRecord};

/// Top-level response envelope: `{"data": ...}` or `{"errors": [...]}`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseResult {
    pub succeeded: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    pub id: i64,
}

/// Result object of `users.create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    pub response_result: ResponseResult,
    #[serde(default)]
    pub user: Option<CreatedUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateUserData {
    pub users: CreateUserNamespace,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateUserNamespace {
    pub create: CreateUserPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListUsersData {
    pub users: ListNamespace<UserRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListGroupsData {
    pub groups: ListNamespace<GroupRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListNamespace<T> {
    pub list: Option<Vec<T>>,
}

impl<T> ListNamespace<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.list.unwrap_or_default()
    }
}
