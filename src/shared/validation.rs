use crate::shared::error::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that must also pass its `validator` rules.
///
/// Both malformed JSON and failed validation surface as `BadRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::BadRequest
        })?;

        value.validate().map_err(|e| {
            tracing::debug!("Request body failed validation: {}", e);
            AppError::BadRequest
        })?;

        Ok(ValidatedJson(value))
    }
}
