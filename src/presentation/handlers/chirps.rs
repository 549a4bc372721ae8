use crate::application::chirps::create::{CreateChirpRequest, CreateChirpUseCase};
use crate::application::chirps::delete::DeleteChirpUseCase;
use crate::application::chirps::get::GetChirpUseCase;
use crate::application::chirps::list::ListChirpsUseCase;
use crate::domain::chirps::Chirp;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::AuthUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct ChirpResource {
    pub id: Uuid,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResource {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}

/// Post a chirp as the authenticated user
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = ChirpResource),
        (status = 400, description = "Malformed body or chirp too long", body = ErrorResponse),
        (status = 401, description = "Invalid JWT", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "chirps"
)]
pub async fn create_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateChirpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let chirp = CreateChirpUseCase::new(state.chirps)
        .execute(auth.user_id, req)
        .await?;

    Ok((StatusCode::CREATED, Json(ChirpResource::from(chirp))))
}

/// List every chirp, oldest first
#[utoipa::path(
    get,
    path = "/api/chirps",
    responses((status = 200, description = "All chirps", body = Vec<ChirpResource>)),
    tag = "chirps"
)]
pub async fn list_chirps(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let chirps = ListChirpsUseCase::new(state.chirps).execute().await?;

    let resources: Vec<ChirpResource> = chirps.into_iter().map(ChirpResource::from).collect();
    Ok((StatusCode::OK, Json(resources)))
}

#[utoipa::path(
    get,
    path = "/api/chirps/{id}",
    params(("id" = String, Path, description = "Chirp ID")),
    responses(
        (status = 200, description = "Chirp found", body = ChirpResource),
        (status = 404, description = "Chirp not found", body = ErrorResponse)
    ),
    tag = "chirps"
)]
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let chirp = GetChirpUseCase::new(state.chirps).execute(&id).await?;
    Ok((StatusCode::OK, Json(ChirpResource::from(chirp))))
}

/// Delete one of the authenticated user's chirps
#[utoipa::path(
    delete,
    path = "/api/chirps/{id}",
    params(("id" = String, Path, description = "Chirp ID")),
    responses(
        (status = 204, description = "Chirp deleted"),
        (status = 401, description = "Invalid JWT", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Chirp not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "chirps"
)]
pub async fn delete_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    DeleteChirpUseCase::new(state.chirps)
        .execute(auth.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
