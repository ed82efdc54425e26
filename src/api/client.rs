use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use super::error::ApiError;
use crate::config::Config;
use crate::models::GraphQlResponse;

static SILENT: AtomicBool = AtomicBool::new(false);

/// Variable names whose values never reach the terminal.
const SECRET_VARIABLES: [&str; 1] = ["passwordRaw"];

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Copy of `value` with secret variables replaced by asterisks.
pub fn mask_secrets(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| {
                    if SECRET_VARIABLES.contains(&k.as_str()) {
                        (k.clone(), Value::from("********"))
                    } else {
                        (k.clone(), mask_secrets(v))
                    }
                })
                .collect(),
        ),
        Value::Array(arr) => Value::Array(arr.iter().map(mask_secrets).collect()),
        other => other.clone(),
    }
}

/// Client for the Wiki.js GraphQL endpoint.
/// Sends one POST per operation; no retries, no caching.
#[derive(Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    config: Config,
}

impl GraphQlClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("wikijs-admin/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: Config) -> Self {
        Self { http, config }
    }

    /// Send a query or mutation and decode its `data` payload into `T`.
    ///
    /// A top-level `errors` array becomes [`ApiError::GraphQl`] carrying the
    /// first message and the variables that were sent.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<T, ApiError> {
        let mut body = json!({ "query": query });
        if let Some(ref v) = variables {
            body["variables"] = v.clone();
        }

        self.log_request(&body);
        tracing::debug!(url = %self.config.api_url, "Sending GraphQL request");

        let response = self
            .http
            .post(&self.config.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log_output(format!(
                "Response:\n{}",
                Paint::new(format!("HTTP {}: {}", status, text)).red()
            ));
            tracing::warn!(status = status.as_u16(), "GraphQL endpoint returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        // Response body in dark gray so the next request stands out
        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));

        let envelope: GraphQlResponse<Value> = serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("invalid JSON: {}", e)))?;

        if let Some(first) = envelope.errors.as_ref().and_then(|errs| errs.first()) {
            return Err(ApiError::GraphQl {
                message: first.message.clone(),
                variables,
            });
        }

        match envelope.data {
            Some(Value::Null) | None => Err(ApiError::Decode("response contained no data".into())),
            Some(data) => serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string())),
        }
    }

    fn log_request(&self, body: &Value) {
        if SILENT.load(Ordering::Relaxed) {
            return;
        }
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new("POST").fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&self.config.api_url).fg(yansi::Color::Cyan)));
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Authorization: Bearer ********'").fg(yansi::Color::Magenta)
        ));
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));

        let json_str = serde_json::to_string_pretty(&mask_secrets(body)).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!(
            "{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
        log_output(format!("Request:\n{}", parts.join(" ")));
    }
}
