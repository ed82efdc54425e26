use crate::api::{list_groups, list_users, ApiError, GraphQlClient};
use crate::models::{GroupRecord, UserRecord};
use crate::output;

/// Users and groups, each sorted by id. A list whose fetch failed is empty.
#[derive(Debug, Clone)]
pub struct Directory {
    pub users: Vec<UserRecord>,
    pub groups: Vec<GroupRecord>,
}

pub async fn fetch_users(client: &GraphQlClient) -> Result<Vec<UserRecord>, ApiError> {
    let mut users = list_users(client).await?;
    users.sort_by_key(|u| u.id);
    Ok(users)
}

pub async fn fetch_groups(client: &GraphQlClient) -> Result<Vec<GroupRecord>, ApiError> {
    let mut groups = list_groups(client).await?;
    groups.sort_by_key(|g| g.id);
    Ok(groups)
}

/// Fetch both lists one after the other; a failure on one does not stop the other.
pub async fn load_directory(client: &GraphQlClient) -> Directory {
    let users = fetch_users(client).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to fetch users");
        output::report_api_error(&e);
        Vec::new()
    });
    let groups = fetch_groups(client).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to fetch groups");
        output::report_api_error(&e);
        Vec::new()
    });
    Directory { users, groups }
}
