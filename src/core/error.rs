use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Field-level validation failures, accumulated so the client can fix
    /// everything in one round trip
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Malformed or missing request input outside field validation
    /// (e.g. a missing query parameter)
    #[error("{0}")]
    BadRequest(String),

    /// Missing, invalid, or expired bearer token
    #[error("{0}")]
    Authentication(String),

    /// Resource not found. Also reported for resources owned by another
    /// user, so existence never leaks across accounts
    #[error("{0}")]
    NotFound(String),

    /// Duplicate resource (registration email collision)
    #[error("{0}")]
    Conflict(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rate limit exceeded
    #[error("{0}")]
    RateLimitExceeded(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Database(_)
            | AppError::Migration(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::Validation(details) => HttpResponse::build(status).json(serde_json::json!({
                "error": "Validation failed",
                "details": details,
            })),
            // Server faults are logged with full detail and reported generically
            AppError::Database(_)
            | AppError::Migration(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => {
                tracing::error!("Unhandled error: {}", self);
                HttpResponse::build(status).json(serde_json::json!({
                    "error": "Internal server error",
                }))
            }
            other => HttpResponse::build(status).json(serde_json::json!({
                "error": other.to_string(),
            })),
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        AppError::Authentication(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
