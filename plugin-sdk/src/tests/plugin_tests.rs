//! Tests for the plugin registration surface
//!
//! These tests verify that services, actions and evaluators move through the
//! runtime contract correctly.

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::error::Result;
    use crate::plugin::{downcast_service, Action, Message, Plugin, Service};
    use crate::runtime::{AgentRuntime, MemoryRuntime};

    // Mock implementations for testing

    struct EchoService;

    impl Service for EchoService {
        fn name(&self) -> &str {
            "EchoService"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct OtherService;

    impl Service for OtherService {
        fn name(&self) -> &str {
            "OtherService"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct EchoAction;

    #[async_trait]
    impl Action for EchoAction {
        fn name(&self) -> &str {
            "ECHO"
        }

        fn description(&self) -> &str {
            "Echoes the query parameter back."
        }

        async fn validate(
            &self,
            _runtime: &dyn AgentRuntime,
            _message: &Message,
            params: &Value,
        ) -> bool {
            params.get("query").and_then(Value::as_str).is_some()
        }

        async fn handler(
            &self,
            _runtime: &dyn AgentRuntime,
            _message: &Message,
            params: &Value,
        ) -> Result<String> {
            Ok(params["query"].as_str().unwrap_or_default().to_string())
        }
    }

    fn echo_plugin() -> Plugin {
        Plugin {
            name: "echo",
            description: "Test plugin with one service and one action.",
            services: vec![Arc::new(EchoService)],
            actions: vec![Arc::new(EchoAction)],
            evaluators: vec![],
        }
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::from_text("first");
        let b = Message::from_text("second");

        assert_ne!(a.id, b.id);
        assert_eq!(a.text, "first");
    }

    #[test]
    fn test_install_registers_plugin_services() {
        let mut runtime = MemoryRuntime::new();
        runtime.install(&echo_plugin());

        let service = runtime.get_service("EchoService");
        assert!(service.is_some());
        assert!(runtime.get_service("MissingService").is_none());
    }

    #[test]
    fn test_downcast_service_typed_retrieval() {
        let mut runtime = MemoryRuntime::new();
        runtime.register_service(Arc::new(EchoService));

        let service = runtime.get_service("EchoService").unwrap();

        // Correct type downcasts, wrong type does not
        assert!(downcast_service::<EchoService>(&service).is_some());
        assert!(downcast_service::<OtherService>(&service).is_none());
    }

    #[tokio::test]
    async fn test_action_validate_and_handler() {
        let runtime = MemoryRuntime::new();
        let message = Message::from_text("hi");
        let action = EchoAction;

        assert!(action.validate(&runtime, &message, &json!({"query": "x"})).await);
        assert!(!action.validate(&runtime, &message, &json!({})).await);

        let out = action
            .handler(&runtime, &message, &json!({"query": "hello"}))
            .await
            .unwrap();
        assert_eq!(out, "hello");
    }
}
