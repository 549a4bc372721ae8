use crate::application::users::create::{CreateUserRequest, CreateUserUseCase};
use crate::application::users::update::{UpdateUserRequest, UpdateUserUseCase};
use crate::domain::users::User;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::AuthUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of a user; never carries the password hash
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResource {
    pub id: Uuid,
    pub email: String,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
    pub is_chirpy_red: bool,
}

impl From<User> for UserResource {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
            is_chirpy_red: user.is_chirpy_red,
        }
    }
}

/// Create user handler
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResource),
        (status = 400, description = "Malformed body or email taken", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateUserUseCase::new(state.users, state.password_service);

    let user = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(UserResource::from(user))))
}

/// Update the authenticated user's email and password
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResource),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Invalid JWT", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateUserUseCase::new(state.users, state.password_service);

    let user = use_case.execute(auth.user_id, req).await?;

    Ok((StatusCode::OK, Json(UserResource::from(user))))
}
