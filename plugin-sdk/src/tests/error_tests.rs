//! Tests for error handling functionality
//!
//! These tests verify that the error system in the SDK works correctly.

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use crate::error::{mapping, ErrorContext, ServiceError};

    #[test]
    fn test_service_error_creation() {
        // Test factory methods
        let network_err = ServiceError::network("Connection failed");
        let not_found_err = ServiceError::not_found("AgentTerminalService not found");
        let parsing_err = ServiceError::parsing("unexpected token");

        // Check error messages
        assert_eq!(network_err.to_string(), "Network error: Connection failed");
        assert_eq!(
            not_found_err.to_string(),
            "Not found: AgentTerminalService not found"
        );
        assert_eq!(parsing_err.to_string(), "Parsing error: unexpected token");
    }

    #[test]
    fn test_error_context() {
        let base_err = ServiceError::network("Connection timeout");

        let context = ErrorContext::for_service("agentterminal")
            .status_code(502)
            .endpoint("https://artificialcz.com/api0/agentterminal/")
            .with("attempt", 1);

        let err_with_context = base_err.with_context(context);

        // Context data is accessible
        assert_eq!(err_with_context.service_name(), Some("agentterminal"));
        assert_eq!(err_with_context.status_code(), Some(502));

        // Display formatting includes the base error
        assert!(err_with_context.to_string().contains("Connection timeout"));

        // Quick context addition keeps the message
        let quick_err = ServiceError::timeout("Request timed out").with_context_value("attempt", 2);
        assert!(quick_err.to_string().contains("Request timed out"));
    }

    #[test]
    fn test_http_status_mapping() {
        let auth = mapping::map_http_error(StatusCode::UNAUTHORIZED, r#"{"error":"bad key"}"#);
        assert!(matches!(auth, ServiceError::Authentication(msg) if msg.contains("bad key")));

        let rate = mapping::map_http_error(StatusCode::TOO_MANY_REQUESTS, "");
        assert!(matches!(rate, ServiceError::RateLimit(_)));

        let validation =
            mapping::map_http_error(StatusCode::BAD_REQUEST, r#"{"message":"query required"}"#);
        assert!(
            matches!(validation, ServiceError::Validation(msg) if msg.contains("query required"))
        );

        let server = mapping::map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(server, ServiceError::Service(_)));
    }

    #[test]
    fn test_http_mapping_non_json_body() {
        // Non-JSON bodies fold the status into the message
        let err = mapping::map_http_error(StatusCode::BAD_GATEWAY, "upstream unavailable");
        assert!(matches!(err, ServiceError::Service(msg) if msg.contains("upstream unavailable")));
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_failure = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ServiceError = parse_failure.into();

        assert!(err.to_string().contains("JSON error"));
        assert_eq!(err.service_name(), Some("json"));
    }
}
