use super::response::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::ValidationErrors;

pub const SYSTEM_ERROR_MESSAGE: &str = "Internal system error";

/// The published response-code table. `Success` and `DatabaseError` are
/// not produced by this service but keep their numbers reserved for clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Success,
    ValidationError,
    DatabaseError,
    SystemError,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "1000",
            Self::ValidationError => "1001",
            Self::DatabaseError => "1002",
            Self::SystemError => "1003",
        }
    }
}

/// Every failure an endpoint can end in. All of them are rendered as a
/// `success: false` envelope with HTTP 200; clients tell failures apart by
/// `code`, never by status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Domain { code: String, message: String },
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn domain(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Domain {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }

    pub fn unexpected(detail: impl ToString) -> Self {
        Self::Unexpected(detail.to_string())
    }

    pub fn code(&self) -> String {
        match self {
            Self::Domain { code, .. } => code.clone(),
            Self::Validation(_) => ErrorCode::ValidationError.code().to_string(),
            Self::Unexpected(_) => ErrorCode::SystemError.code().to_string(),
        }
    }

    /// The message shown to the caller. Unexpected failures never expose
    /// their detail.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unexpected(_) => SYSTEM_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn into_envelope(self) -> ApiResponse<()> {
        match &self {
            Self::Domain { code, message } => {
                tracing::warn!("Domain failure: code={}, message={}", code, message)
            }
            Self::Validation(_) => tracing::warn!("Parameter validation failed: {}", self),
            Self::Unexpected(detail) => tracing::error!("Unexpected failure: {}", detail),
        }

        ApiResponse::error(self.code(), self.public_message())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(super::validation::messages(&errors))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.into_envelope())).into_response()
    }
}
