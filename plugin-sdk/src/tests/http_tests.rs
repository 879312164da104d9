//! Tests for the shared HTTP utilities
//!
//! These tests use WireMock to verify client construction and error-response
//! handling against a live socket.

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::ServiceError;
    use crate::http::{build_http_client, parse_error_response, UserAgent};

    #[test]
    fn test_user_agent_formatting() {
        let ua = UserAgent {
            app_name: "AICZ-Agent".to_string(),
            version: "0.1.0".to_string(),
            extra: Some("AgentTerminal-Client".to_string()),
        };
        assert_eq!(ua.to_string(), "AICZ-Agent/0.1.0 (AgentTerminal-Client)");

        let bare = UserAgent {
            app_name: "AICZ-Agent".to_string(),
            version: "0.1.0".to_string(),
            extra: None,
        };
        assert_eq!(bare.to_string(), "AICZ-Agent/0.1.0");
    }

    #[tokio::test]
    async fn test_client_sends_default_user_agent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("user-agent", "AICZ-Agent/0.1.0 (plugin-sdk)"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = build_http_client(None, None).unwrap();
        let response = client.get(server.uri()).send().await.unwrap();

        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_parse_error_response_attaches_context() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(429).set_body_string(r#"{"error":"slow down"}"#),
            )
            .mount(&server)
            .await;

        let client = build_http_client(None, None).unwrap();
        let response = client.get(server.uri()).send().await.unwrap();

        let err = parse_error_response("agentterminal", response).await;

        assert!(matches!(
            &err,
            ServiceError::WithContext { inner, .. } if matches!(&**inner, ServiceError::RateLimit(_))
        ));
        assert_eq!(err.service_name(), Some("agentterminal"));
        assert_eq!(err.status_code(), Some(429));
        assert!(err.to_string().contains("slow down"));
    }
}
