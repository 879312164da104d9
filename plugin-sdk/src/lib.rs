//! # Plugin SDK
//!
//! A unified SDK for host-runtime plugin integrations in the AICZ agent
//! project.
//!
//! This crate provides:
//!
//! - The host-runtime contract plugins are invoked through
//! - The plugin registration surface (services, actions, evaluators)
//! - A normalized error handling system
//! - HTTP client utilities shared by the API-calling plugins
//!
//! ## Architecture
//!
//! The Plugin SDK is designed around the following key abstractions:
//!
//! - `AgentRuntime`: the capability handle the host injects into every call,
//!   used to read named settings and retrieve registered services
//! - `Service`: a named worker object registered with the runtime and
//!   retrieved by actions to perform the actual external work
//! - `Action`: a runtime-invocable operation with a validation predicate and
//!   a handler
//! - `Evaluator`: a handler run against every incoming conversational message
//! - `ServiceError`: normalized error type for all SDK operations

// Re-export the runtime contract
pub mod runtime;
pub use runtime::{AgentRuntime, EnvRuntime, MemoryRuntime};

// Re-export the plugin registration surface
pub mod plugin;
pub use plugin::{downcast_service, Action, Evaluator, Message, Plugin, Service};

// Re-export error handling
pub mod error;
pub use error::{ErrorContext, Result, ServiceError};

// HTTP utilities shared by API-calling plugins
pub mod http;
pub use http::{build_http_client, parse_error_response, UserAgent};

#[cfg(test)]
mod tests;
