use actix_web::http::StatusCode;
use serde_json::json;
use std::fmt;

/// Errors that can occur during external service communication
#[derive(Debug)]
pub enum ConnectorError {
    /// Transport-level failure talking to the service
    HttpError(String),
    /// Service unreachable or timeout
    ServiceUnavailable(String),
    /// Invalid response format from external service
    InvalidResponse(String),
    /// Connector is missing credentials
    NotConfigured(String),
    /// Non-2xx answer; status and body are mirrored to our caller
    Upstream { status: u16, body: serde_json::Value },
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::NotConfigured(msg) => write!(f, "{}", msg),
            Self::Upstream { status, .. } => write!(f, "Upstream responded with {}", status),
        }
    }
}

impl ConnectorError {
    /// Body sent back to the client; `details` carries the upstream payload when there is one.
    pub fn to_json(&self, error: &str) -> serde_json::Value {
        match self {
            Self::Upstream { body, .. } => json!({ "error": error, "details": body }),
            Self::NotConfigured(msg) => json!({ "error": msg }),
            other => json!({ "error": error, "details": other.to_string() }),
        }
    }

    /// Status returned to our caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpError(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
