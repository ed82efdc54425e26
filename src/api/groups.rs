use super::client::GraphQlClient;
use super::error::ApiError;
use crate::models::graphql::ListGroupsData;
use crate::models::GroupRecord;

pub const LIST_GROUPS_QUERY: &str = r#"
query {
  groups {
    list {
      id
      name
      createdAt
    }
  }
}
"#;

pub async fn list_groups(client: &GraphQlClient) -> Result<Vec<GroupRecord>, ApiError> {
    let data: ListGroupsData = client.execute(LIST_GROUPS_QUERY, None).await?;
    Ok(data.groups.into_vec())
}
