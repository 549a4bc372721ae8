use crate::domain::chirps::{Chirp, ChirpRepository, NewChirp};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::chirps::ChirpDbModel;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresChirpRepository {
    pool: DbPool,
}

impl PostgresChirpRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChirpRepository for PostgresChirpRepository {
    async fn create(&self, new_chirp: NewChirp) -> Result<Chirp, anyhow::Error> {
        let chirp = sqlx::query_as::<_, ChirpDbModel>(
            r#"
            INSERT INTO chirps (body, user_id)
            VALUES ($1, $2)
            RETURNING id, body, user_id, created_at, updated_at
            "#,
        )
        .bind(new_chirp.body)
        .bind(new_chirp.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(chirp.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, anyhow::Error> {
        let chirp = sqlx::query_as::<_, ChirpDbModel>(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chirp.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Chirp>, anyhow::Error> {
        let chirps = sqlx::query_as::<_, ChirpDbModel>(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(chirps.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
