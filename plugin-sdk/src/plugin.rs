//! Plugin registration surface
//!
//! This module defines the contract between the host runtime and a plugin:
//!
//! - `Service`: does the actual external work, registered/retrieved by name
//! - `Action`: a runtime-invocable operation with a `validate`/`handler` pair
//! - `Evaluator`: a handler run against every incoming message
//! - `Plugin`: a named bundle of the above, registered as one unit
//!
//! The host owns conversation state and dispatch; plugins only see the
//! injected [`AgentRuntime`] handle and the [`Message`] under inspection.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::Result;
use crate::runtime::AgentRuntime;

/// A conversational message, as handed to evaluators and actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Host-assigned message id.
    pub id: Uuid,

    /// Free text of the message.
    pub text: String,
}

impl Message {
    /// Construct a message with a fresh id.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

/// Base trait for runtime-registered services.
pub trait Service: Send + Sync {
    /// Name used to register/retrieve this service in the runtime.
    fn name(&self) -> &str;

    /// Upcast used by [`downcast_service`] for typed retrieval.
    fn as_any(&self) -> &dyn Any;
}

/// Typed retrieval of a registered service.
///
/// Returns `None` when the registered service is not of the expected
/// concrete type.
pub fn downcast_service<T: Service + 'static>(service: &Arc<dyn Service>) -> Option<&T> {
    service.as_any().downcast_ref::<T>()
}

/// A runtime-invocable operation, triggered by the host on matching agent
/// intent.
#[async_trait]
pub trait Action: Send + Sync {
    /// The action name the agent invokes this by.
    fn name(&self) -> &str;

    /// Human-readable description surfaced to the agent.
    fn description(&self) -> &str;

    /// Illustrative invocation strings.
    fn examples(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Whether the incoming parameters are acceptable for this action.
    async fn validate(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Message,
        params: &Value,
    ) -> bool;

    /// Perform the action and return text for the conversation.
    ///
    /// The only error expected to cross this boundary is a wiring fault
    /// (e.g. the backing service was never registered); data-path failures
    /// are converted to fallback text inside the services.
    async fn handler(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Message,
        params: &Value,
    ) -> Result<String>;
}

/// A handler run against every incoming message, used for passive scanning.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// The evaluator name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Whether this evaluator wants to inspect the message.
    async fn validate(&self, runtime: &dyn AgentRuntime, message: &Message) -> bool;

    /// Inspect the message, optionally producing data for the host.
    async fn handler(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Message,
    ) -> Result<Option<Value>>;
}

/// A named bundle of services, actions and evaluators, registered with the
/// host runtime as one unit.
pub struct Plugin {
    /// Plugin name.
    pub name: &'static str,

    /// Plugin description.
    pub description: &'static str,

    /// Services instantiated by this plugin.
    pub services: Vec<Arc<dyn Service>>,

    /// Actions this plugin contributes.
    pub actions: Vec<Arc<dyn Action>>,

    /// Evaluators this plugin contributes.
    pub evaluators: Vec<Arc<dyn Evaluator>>,
}
