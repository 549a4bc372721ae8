pub mod create;
pub mod reset;
pub mod update;
pub mod upgrade;

use crate::domain::users::EmailTaken;
use crate::shared::error::AppError;

/// A lost race on the unique email constraint is the caller's mistake, not ours
fn email_conflict(e: anyhow::Error) -> AppError {
    if e.is::<EmailTaken>() {
        AppError::BadRequest
    } else {
        AppError::ServiceError(e)
    }
}
