use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_API_URL: &str = "";
pub const DEFAULT_API_KEY: &str = "";
pub const API_URL_VAR: &str = "WIKI_API_URL";
pub const API_KEY_VAR: &str = "API_KEY";

/// Connection settings for the Wiki.js GraphQL endpoint.
///
/// Built once at startup and handed to the client. Missing values are kept as
/// empty strings; the first request then fails with a connection or
/// authentication error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
}

impl Config {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: sanitize_api_url(&api_url.into()),
            api_key: api_key.into(),
        }
    }

    /// Load `.env` (or the given file) and read the endpoint and token.
    pub fn from_env(env_file: Option<&str>) -> Self {
        load_env_file(env_file);
        Self::new(get_api_url(), get_api_key())
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_url() -> String {
    sanitize_api_url(&env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
}

pub fn get_api_key() -> String {
    env::var(API_KEY_VAR)
        .map(|k| k.trim().to_string())
        .unwrap_or_else(|_| DEFAULT_API_KEY.to_string())
}

pub fn sanitize_api_url(raw: &str) -> String {
    raw.trim().to_string()
}
