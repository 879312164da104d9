//! The `AUTO_TA_REQUEST_CHART` action
//!
//! The LLM can produce this action with something like
//! `<ACTION: AUTO_TA_REQUEST_CHART>{ "query": "Plot BNB with MACD on 1h" }`.
//! This triggers the service to call the API and return a textual result
//! (including the chart URL).

use async_trait::async_trait;
use serde_json::Value;

use plugin_sdk::{downcast_service, Action, AgentRuntime, Message, Result, ServiceError};

use crate::service::AutoTaService;

/// Runtime action driving the AutoTA service.
pub struct AutoTaRequestChartAction;

#[async_trait]
impl Action for AutoTaRequestChartAction {
    fn name(&self) -> &str {
        "AUTO_TA_REQUEST_CHART"
    }

    fn description(&self) -> &str {
        "Sends an English text request for a technical analysis chart to the AutoTA API."
    }

    fn examples(&self) -> Vec<&str> {
        vec![r#"<ACTION: AUTO_TA_REQUEST_CHART>{ "query": "BTC chart, daily timeframe, show RSI." }"#]
    }

    async fn validate(
        &self,
        _runtime: &dyn AgentRuntime,
        _message: &Message,
        params: &Value,
    ) -> bool {
        // Must provide a 'query' field with a non-empty string
        params
            .get("query")
            .and_then(Value::as_str)
            .map_or(false, |q| !q.trim().is_empty())
    }

    async fn handler(
        &self,
        runtime: &dyn AgentRuntime,
        _message: &Message,
        params: &Value,
    ) -> Result<String> {
        let user_request = params.get("query").and_then(Value::as_str).unwrap_or_default();

        // Retrieve our service from the runtime
        let service = runtime.get_service(AutoTaService::NAME).ok_or_else(|| {
            ServiceError::not_found("AutoTaService not found. Check plugin registration.")
        })?;
        let service = downcast_service::<AutoTaService>(&service).ok_or_else(|| {
            ServiceError::internal("registered AutoTaService has an unexpected type")
        })?;

        // Generate the chart (or analysis) and return the final text
        Ok(service.generate_chart(runtime, user_request).await)
    }
}
