/// Error types for GraphQL calls
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the Wiki.js GraphQL endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout and similar transport errors
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected schema
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The response carried a top-level `errors` array
    #[error("API error: {message}")]
    GraphQl {
        /// First error message returned by the server
        message: String,
        /// Variables that were sent with the operation
        variables: Option<Value>,
    },

    /// The mutation ran but its `responseResult.succeeded` flag was false
    #[error("Creation failed: {message}")]
    Rejected {
        message: String,
        variables: Option<Value>,
    },
}
