//! The `AGENT_TERMINAL_QUERY` action
//!
//! The agent can invoke this action (by name) with an object like
//! `{"query": "Describe current BNB market conditions"}`, causing the
//! runtime to call [`AgentTerminalService`] to retrieve data.

use async_trait::async_trait;
use serde_json::Value;

use plugin_sdk::{downcast_service, Action, AgentRuntime, Message, Result, ServiceError};

use crate::service::AgentTerminalService;

/// Runtime action driving the AgentTerminal service.
pub struct AgentTerminalQueryAction;

#[async_trait]
impl Action for AgentTerminalQueryAction {
    fn name(&self) -> &str {
        "AGENT_TERMINAL_QUERY"
    }

    fn description(&self) -> &str {
        "Sends an English query to the configured AgentTerminal API and returns relevant data."
    }

    fn examples(&self) -> Vec<&str> {
        vec![r#"<ACTION: AGENT_TERMINAL_QUERY>{ "query": "Tell me about BNB price trends." }"#]
    }

    async fn validate(
        &self,
        _runtime: &dyn AgentRuntime,
        _message: &Message,
        params: &Value,
    ) -> bool {
        // Must provide a 'query' field
        params
            .get("query")
            .and_then(Value::as_str)
            .map_or(false, |q| !q.is_empty())
    }

    async fn handler(
        &self,
        runtime: &dyn AgentRuntime,
        _message: &Message,
        params: &Value,
    ) -> Result<String> {
        let query = params.get("query").and_then(Value::as_str).unwrap_or_default();

        // Retrieve our service from the runtime (it is registered by the plugin)
        let service = runtime
            .get_service(AgentTerminalService::NAME)
            .ok_or_else(|| {
                ServiceError::not_found(
                    "AgentTerminalService not found in runtime. Check plugin registration.",
                )
            })?;
        let service = downcast_service::<AgentTerminalService>(&service).ok_or_else(|| {
            ServiceError::internal("registered AgentTerminalService has an unexpected type")
        })?;

        // Perform the request
        let result_text = service.query(runtime, query).await;

        // Return the resulting text to the conversation
        Ok(format!(
            "[AgentTerminal BEGIN]\n{}[AGENTTERMINAL END]",
            result_text
        ))
    }
}
