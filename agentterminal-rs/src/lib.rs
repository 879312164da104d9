//! AgentTerminal plugin
//!
//! Provides a service that sends plain-English queries to
//! `https://artificialcz.com/api0/agentterminal/` (or a user-configured
//! endpoint) and returns relevant data to the agent. The agent triggers it
//! via the `AGENT_TERMINAL_QUERY` action.

use std::sync::Arc;

use plugin_sdk::Plugin;

pub mod action;
pub mod config;
pub mod service;

pub use action::AgentTerminalQueryAction;
pub use config::TerminalConfig;
pub use service::{AgentTerminalService, FALLBACK_TEXT};


/// Construct the AgentTerminal plugin registration bundle: one
/// [`AgentTerminalService`] plus the [`AgentTerminalQueryAction`] that
/// drives it.
pub fn plugin() -> Plugin {
    Plugin {
        name: "agentterminal",
        description: "Allows agents to fetch external context by sending plain-English queries to the AICZ API.",
        services: vec![Arc::new(AgentTerminalService::new())],
        actions: vec![Arc::new(AgentTerminalQueryAction)],
        evaluators: vec![],
    }
}
