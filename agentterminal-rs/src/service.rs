//! AgentTerminal query service
//!
//! A service that sends user-specified queries to the AgentTerminal backend
//! and returns the response text for the agent to use as context. Callers
//! always receive a string: every transport, status or parse failure is
//! logged and collapsed into [`FALLBACK_TEXT`].

use std::any::Any;

use log::{debug, error};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use plugin_sdk::http::{build_http_client, parse_error_response, UserAgent};
use plugin_sdk::{AgentRuntime, Result, Service, ServiceError};

use crate::config::TerminalConfig;

/// Fallback text returned whenever the remote call fails.
pub const FALLBACK_TEXT: &str = "(AgentTerminalService encountered an error)";

/// Request body sent to the AgentTerminal API.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// AgentTerminal API client service.
pub struct AgentTerminalService {
    /// HTTP client
    http_client: Client,
}

impl AgentTerminalService {
    /// Name used to register/retrieve this service in the runtime.
    pub const NAME: &'static str = "AgentTerminalService";

    /// Create a new service instance.
    pub fn new() -> Self {
        let http_client = build_http_client(
            Some(UserAgent {
                app_name: "AICZ-Agent".to_string(),
                version: "0.1.0".to_string(),
                extra: Some("AgentTerminal-Client".to_string()),
            }),
            None,
        )
        .unwrap_or_else(|e| {
            error!("Failed to build AgentTerminal HTTP client: {}", e);
            panic!("Failed to build AgentTerminal HTTP client: {}", e);
        });

        Self { http_client }
    }

    /// Send a plain-English query to the configured endpoint and return the
    /// response text.
    ///
    /// The endpoint and timeout are resolved from runtime settings on every
    /// call. No retries are attempted.
    pub async fn query(&self, runtime: &dyn AgentRuntime, user_query: &str) -> String {
        let config = TerminalConfig::from_runtime(runtime);

        match self.execute_query(&config, user_query).await {
            Ok(text) => text,
            Err(err) => {
                // Log the error, return fallback text
                error!("AgentTerminalService query error: {}", err);
                FALLBACK_TEXT.to_string()
            }
        }
    }

    async fn execute_query(&self, config: &TerminalConfig, user_query: &str) -> Result<String> {
        debug!("Sending request to AgentTerminal: POST {}", config.endpoint);

        let response = self
            .http_client
            .post(&config.endpoint)
            .header("Content-Type", "application/json")
            .timeout(config.timeout())
            .json(&QueryRequest { query: user_query })
            .send()
            .await
            .map_err(|e| ServiceError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(parse_error_response("agentterminal", response).await);
        }

        let data = response
            .json::<Value>()
            .await
            .map_err(|e| ServiceError::parsing(format!("Failed to parse response: {}", e)))?;

        Ok(extract_response_text(&data))
    }
}

impl Default for AgentTerminalService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for AgentTerminalService {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Ordered-fallback read of the loosely-typed response object: a string
/// `result` field wins, then a string `summary`, then the whole body
/// re-serialized as text.
fn extract_response_text(data: &Value) -> String {
    data.get("result")
        .and_then(Value::as_str)
        .or_else(|| data.get("summary").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| data.to_string())
}
