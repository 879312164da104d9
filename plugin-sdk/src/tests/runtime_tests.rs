//! Tests for the runtime implementations
//!
//! These tests verify setting resolution and service registration for the
//! in-memory and environment-backed runtimes.

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::env;
    use std::sync::Arc;

    use crate::plugin::Service;
    use crate::runtime::{AgentRuntime, EnvRuntime, MemoryRuntime};

    struct DummyService;

    impl Service for DummyService {
        fn name(&self) -> &str {
            "DummyService"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_memory_runtime_service_registry() {
        let mut runtime = MemoryRuntime::new();
        runtime.register_service(Arc::new(DummyService));

        assert!(runtime.get_service("DummyService").is_some());
        assert!(runtime.get_service("Nope").is_none());
    }

    #[test]
    fn test_memory_runtime_setting_overwrite() {
        let mut runtime = MemoryRuntime::new();
        runtime.set_setting("AUTOTA_ENDPOINT", "http://first.invalid/");
        runtime.set_setting("AUTOTA_ENDPOINT", "http://second.invalid/");

        assert_eq!(
            runtime.get_setting("AUTOTA_ENDPOINT").as_deref(),
            Some("http://second.invalid/")
        );
    }

    #[test]
    fn test_env_runtime_reads_environment() {
        // Unique variable name to avoid clashing with parallel tests
        env::set_var("PLUGIN_SDK_TEST_SENTIENCE_FILE_PATHS", "a.txt,b.txt");

        let runtime = EnvRuntime::new().with_prefix("PLUGIN_SDK_TEST");
        assert_eq!(
            runtime.get_setting("SENTIENCE_FILE_PATHS").as_deref(),
            Some("a.txt,b.txt")
        );
        assert!(runtime.get_setting("SENTIENCE_MISSING").is_none());

        env::remove_var("PLUGIN_SDK_TEST_SENTIENCE_FILE_PATHS");
    }

    #[test]
    fn test_env_runtime_service_registry() {
        let mut runtime = EnvRuntime::new();
        runtime.register_service(Arc::new(DummyService));

        assert!(runtime.get_service("DummyService").is_some());
    }
}
