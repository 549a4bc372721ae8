use crate::domain::chirps::Chirp;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct ChirpDbModel {
    pub id: Uuid,
    pub body: String,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<ChirpDbModel> for Chirp {
    fn from(model: ChirpDbModel) -> Self {
        Self {
            id: model.id,
            body: model.body,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
