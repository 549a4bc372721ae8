use crate::application::auth::login::{LoginRequest, LoginResponse};
use crate::application::auth::refresh::RefreshTokenResponse;
use crate::application::chirps::create::CreateChirpRequest;
use crate::application::users::create::CreateUserRequest;
use crate::application::users::update::UpdateUserRequest;
use crate::application::users::upgrade::{WebhookData, WebhookRequest};
use crate::presentation::handlers::chirps::ChirpResource;
use crate::presentation::handlers::users::UserResource;
use crate::shared::error::ErrorResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chirpy API",
        version = "0.1.0",
        description = "Short-message service with session tokens, refresh tokens and a payment webhook"
    ),
    paths(
        crate::presentation::handlers::health::readiness,
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::auth::refresh_token,
        crate::presentation::handlers::auth::revoke_token,
        crate::presentation::handlers::users::create_user,
        crate::presentation::handlers::users::update_user,
        crate::presentation::handlers::chirps::create_chirp,
        crate::presentation::handlers::chirps::list_chirps,
        crate::presentation::handlers::chirps::get_chirp,
        crate::presentation::handlers::chirps::delete_chirp,
        crate::presentation::handlers::webhooks::polka_webhook,
        crate::presentation::handlers::admin::reset,
    ),
    components(
        schemas(
            // Request DTOs
            CreateUserRequest,
            UpdateUserRequest,
            LoginRequest,
            CreateChirpRequest,
            WebhookRequest,
            WebhookData,

            // Responses
            UserResource,
            ChirpResource,
            LoginResponse,
            RefreshTokenResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Probes"),
        (name = "auth", description = "Session endpoints"),
        (name = "users", description = "User endpoints"),
        (name = "chirps", description = "Chirp endpoints"),
        (name = "webhooks", description = "Payment provider callbacks"),
        (name = "admin", description = "Development-only maintenance")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            // Sent as `Authorization: ApiKey <key>`
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}
