use super::client::GraphQlClient;
use super::error::ApiError;
use crate::models::graphql::{CreateUserData, ListUsersData};
use crate::models::{CreateUserPayload, UserCreationRequest, UserRecord};

pub const CREATE_USER_MUTATION: &str = r#"
mutation ($email: String!, $name: String!, $passwordRaw: String!, $groups: [Int!]!, $mustChangePassword: Boolean!, $sendWelcomeEmail: Boolean!) {
  users {
    create (
      email: $email
      name: $name
      passwordRaw: $passwordRaw
      providerKey: "local"
      groups: $groups
      mustChangePassword: $mustChangePassword
      sendWelcomeEmail: $sendWelcomeEmail
    ) {
      responseResult {
        succeeded
        message
      }
      user {
        id
      }
    }
  }
}
"#;

pub const LIST_USERS_QUERY: &str = r#"
query {
  users {
    list {
      id
      name
      email
      isActive
      createdAt
    }
  }
}
"#;

/// Create one local-auth account.
///
/// Returns [`ApiError::Rejected`] when the server processed the mutation but
/// reported `responseResult.succeeded = false`.
pub async fn create_user(
    client: &GraphQlClient,
    request: &UserCreationRequest,
) -> Result<CreateUserPayload, ApiError> {
    let variables = request.variables();
    let data: CreateUserData = client
        .execute(CREATE_USER_MUTATION, Some(variables.clone()))
        .await?;
    let payload = data.users.create;

    if !payload.response_result.succeeded {
        return Err(ApiError::Rejected {
            message: payload
                .response_result
                .message
                .unwrap_or_else(|| "no message".to_string()),
            variables: Some(variables),
        });
    }
    Ok(payload)
}

/// Fetch every account in one query, in server order.
pub async fn list_users(client: &GraphQlClient) -> Result<Vec<UserRecord>, ApiError> {
    let data: ListUsersData = client.execute(LIST_USERS_QUERY, None).await?;
    Ok(data.users.into_vec())
}
