use crate::domain::users::UserRepository;
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// The only payment event acted upon
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WebhookRequest {
    #[schema(example = "user.upgraded")]
    pub event: String,
    pub data: WebhookData,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookData {
    pub user_id: Uuid,
}

/// Marks a user as Chirpy Red when the payment provider reports an upgrade
pub struct UpgradeUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpgradeUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req), fields(event = %req.event))]
    pub async fn execute(&self, req: WebhookRequest) -> Result<(), AppError> {
        if req.event != USER_UPGRADED_EVENT {
            return Err(AppError::NoContent);
        }

        if self.repo.upgrade_to_chirpy_red(req.data.user_id).await? {
            tracing::info!("User {} upgraded to Chirpy Red", req.data.user_id);
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
