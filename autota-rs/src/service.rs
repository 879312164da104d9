//! AutoTA chart service
//!
//! This service takes a plain-English TA request and sends it to the
//! configured endpoint. The endpoint is expected to return a JSON structure
//! containing chart info or analysis text; either field may be missing
//! independently without failing the call.

use std::any::Any;

use log::{debug, error};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use plugin_sdk::http::{build_http_client, parse_error_response, UserAgent};
use plugin_sdk::{AgentRuntime, Result, Service, ServiceError};

use crate::config::AutoTaConfig;

/// Fallback text returned whenever the remote call fails.
pub const FALLBACK_TEXT: &str = "(AutoTaService encountered an error generating chart)";

/// Placeholder used when the response carries no chart URL.
pub const NO_CHART_URL: &str = "(No chart URL)";

/// Placeholder used when the response carries no analysis text.
pub const NO_ANALYSIS: &str = "(No analysis)";

/// Request body sent to the AutoTA API.
#[derive(Debug, Serialize)]
struct ChartRequest<'a> {
    query: &'a str,
}

/// AutoTA API client service.
pub struct AutoTaService {
    /// HTTP client
    http_client: Client,
}

impl AutoTaService {
    /// Name used to register/retrieve this service in the runtime.
    pub const NAME: &'static str = "AutoTaService";

    /// Create a new service instance.
    pub fn new() -> Self {
        let http_client = build_http_client(
            Some(UserAgent {
                app_name: "AICZ-Agent".to_string(),
                version: "0.1.0".to_string(),
                extra: Some("AutoTA-Client".to_string()),
            }),
            None,
        )
        .unwrap_or_else(|e| {
            error!("Failed to build AutoTA HTTP client: {}", e);
            panic!("Failed to build AutoTA HTTP client: {}", e);
        });

        Self { http_client }
    }

    /// Send a TA request string (ticker, timeframe, etc.) to the configured
    /// endpoint and return a two-line text combining the chart link and the
    /// analysis.
    ///
    /// A missing `chartUrl` or `analysis` field is substituted with
    /// placeholder text independently; only a failed call collapses into
    /// [`FALLBACK_TEXT`].
    pub async fn generate_chart(&self, runtime: &dyn AgentRuntime, user_request: &str) -> String {
        let config = AutoTaConfig::from_runtime(runtime);

        match self.execute_request(&config, user_request).await {
            Ok(text) => text,
            Err(err) => {
                // Log the error, return fallback text
                error!("AutoTaService generateChart error: {}", err);
                FALLBACK_TEXT.to_string()
            }
        }
    }

    async fn execute_request(&self, config: &AutoTaConfig, user_request: &str) -> Result<String> {
        debug!("Sending request to AutoTA: POST {}", config.endpoint);

        let response = self
            .http_client
            .post(&config.endpoint)
            .header("Content-Type", "application/json")
            .timeout(config.timeout())
            .json(&ChartRequest {
                query: user_request,
            })
            .send()
            .await
            .map_err(|e| ServiceError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(parse_error_response("autota", response).await);
        }

        let data = response
            .json::<Value>()
            .await
            .map_err(|e| ServiceError::parsing(format!("Failed to parse response: {}", e)))?;

        Ok(format_chart_output(&data))
    }
}

impl Default for AutoTaService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for AutoTaService {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Combine the optional `chartUrl` and `analysis` fields into the final
/// two-line text, substituting placeholders independently.
fn format_chart_output(data: &Value) -> String {
    let chart_url = data
        .get("chartUrl")
        .and_then(Value::as_str)
        .unwrap_or(NO_CHART_URL);
    let analysis = data
        .get("analysis")
        .and_then(Value::as_str)
        .unwrap_or(NO_ANALYSIS);

    format!("Chart URL: {}\nAnalysis: {}", chart_url, analysis)
}
