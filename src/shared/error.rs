use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned for every rejected request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid JWT")]
    pub error: String,
}

/// Every failure that may leave the process.
///
/// Each kind maps to exactly one status code and one fixed message; the
/// payload of `DatabaseError` and `ServiceError` is logged, never sent.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Service error: {0}")]
    ServiceError(#[from] anyhow::Error),
    #[error("Bad request")]
    BadRequest,
    #[error("Chirp is too long")]
    LongChirp,
    #[error("Not found")]
    NotFound,
    #[error("Event does not exist")]
    NoContent,
    #[error("Incorrect email or password")]
    UnauthorizedLogin,
    #[error("Invalid JWT")]
    UnauthorizedBadJwt,
    #[error("Invalid refresh token")]
    UnauthorizedBadRefreshToken,
    #[error("Invalid API key")]
    UnauthorizedBadApiKey,
    #[error("Forbidden")]
    Forbidden,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) | AppError::ServiceError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest | AppError::LongChirp => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::NoContent => StatusCode::NO_CONTENT,
            AppError::UnauthorizedLogin
            | AppError::UnauthorizedBadJwt
            | AppError::UnauthorizedBadRefreshToken
            | AppError::UnauthorizedBadApiKey => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    /// Client-facing message; part of the public contract
    pub fn message(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) | AppError::ServiceError(_) => {
                "Internal server error, try again"
            }
            AppError::BadRequest => "Bad request, try again",
            AppError::LongChirp => "Chirp is too long",
            AppError::NotFound => "Not Found, try again",
            AppError::NoContent => "Event does not exist",
            AppError::UnauthorizedLogin => "Incorrect email or password",
            AppError::UnauthorizedBadJwt => "Invalid JWT",
            AppError::UnauthorizedBadRefreshToken => "Invalid Refresh token",
            AppError::UnauthorizedBadApiKey => "Invalid API key",
            AppError::Forbidden => "You're not allowed to use this endpoint",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::DatabaseError(e) => tracing::error!("Database error: {:?}", e),
            AppError::ServiceError(e) => tracing::error!("Internal server error: {:?}", e),
            _ => tracing::debug!(status = %self.status(), "request rejected: {}", self),
        }

        let status = self.status();
        if status == StatusCode::NO_CONTENT {
            // 204 carries no body
            return status.into_response();
        }

        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
