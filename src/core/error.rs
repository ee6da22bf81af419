use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for gateway and credit operations
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Currency code has no ISO-4217 entry
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Gateway answered with an explicit error
    #[error("Gateway rejected request: {0}")]
    GatewayRejected(String),

    /// Timeout, connection failure, non-2xx status or malformed body
    #[error("Transport error: {0}")]
    Transport(String),

    /// Credit API answered with HTTP status >= 400
    #[error("Credit API error: {0}")]
    CreditApi(String),

    /// Validation errors for caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure inside a caller-supplied notification handler
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Transport(format!("timeout ({})", e))
        } else if e.is_connect() {
            AppError::Transport(format!("connection failed ({})", e))
        } else {
            AppError::Transport(e.to_string())
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownCurrency(_) => StatusCode::BAD_REQUEST,
            AppError::GatewayRejected(_) => StatusCode::BAD_GATEWAY,
            AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::CreditApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn gateway_rejected(msg: impl Into<String>) -> Self {
        AppError::GatewayRejected(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        AppError::Transport(msg.into())
    }

    pub fn credit_api(body: impl Into<String>) -> Self {
        AppError::CreditApi(body.into())
    }
}
