//! Error mapping for remote API responses
//!
//! The remote APIs the plugins call do not document an error schema, so
//! non-success responses are classified generically: probe the body for a
//! JSON `message`/`error` field, then map by status code.

use reqwest::StatusCode;
use serde_json::Value;

use super::ServiceError;

/// Map a non-success HTTP response to a ServiceError
pub fn map_http_error(status: StatusCode, body: &str) -> ServiceError {
    // Try to parse as JSON first
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let message = json
            .get("message")
            .or_else(|| json.get("error"))
            .and_then(|m| m.as_str())
            .unwrap_or(body);

        return map_status(status, message);
    }

    // Fallback to status-based mapping
    let message = if body.is_empty() {
        status.to_string()
    } else if body.len() > 100 {
        format!("{}: {:.100}...", status, body)
    } else {
        format!("{}: {}", status, body)
    };

    map_status(status, &message)
}

fn map_status(status: StatusCode, message: &str) -> ServiceError {
    match status {
        StatusCode::UNAUTHORIZED => ServiceError::authentication(message),
        StatusCode::TOO_MANY_REQUESTS => ServiceError::rate_limit(message),
        StatusCode::BAD_REQUEST => ServiceError::validation(message),
        StatusCode::REQUEST_TIMEOUT => ServiceError::timeout(message),
        StatusCode::NOT_FOUND => {
            ServiceError::service(format!("Resource not found: {}", message))
        }
        _ => ServiceError::service(message),
    }
}
