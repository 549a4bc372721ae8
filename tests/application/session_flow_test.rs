use chirpy::application::auth::login::LoginRequest;
use chirpy::application::auth::session::SessionService;
use chirpy::domain::password::PasswordHashingService;
use chirpy::domain::users::{NewUser, UserRepository};
use chirpy::infrastructure::auth::JwtTokenSigner;
use chirpy::infrastructure::password::PasswordService;
use chirpy::infrastructure::repositories::mock::{MockRefreshTokenRepository, MockUserRepository};
use chirpy::shared::error::AppError;
use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use std::sync::Arc;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}

async fn session_with_alice() -> (SessionService, Arc<MockRefreshTokenRepository>) {
    let users = Arc::new(MockUserRepository::default());
    let refresh_tokens = Arc::new(MockRefreshTokenRepository::default());
    let passwords = Arc::new(PasswordService::new());

    users
        .create(NewUser {
            email: "alice@example.com".to_string(),
            password_hash: passwords.hash_password("secret123").unwrap(),
        })
        .await
        .unwrap();

    let service = SessionService::new(
        users,
        refresh_tokens.clone(),
        Arc::new(JwtTokenSigner::new(b"flow-secret")),
        passwords,
        time::Duration::hours(1),
        "polka-key".to_string(),
    );
    (service, refresh_tokens)
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let (sessions, _) = session_with_alice().await;

    let login = sessions
        .login(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .expect("Login failed");

    // Session token opens protected endpoints
    let user_id = sessions.authenticate(&bearer(&login.token)).unwrap();
    assert_eq!(user_id, login.id);

    // Refresh token is not a session token
    assert!(matches!(
        sessions.authenticate(&bearer(&login.refresh_token)),
        Err(AppError::UnauthorizedBadJwt)
    ));

    let refreshed = sessions.refresh(&bearer(&login.refresh_token)).await.unwrap();
    assert_eq!(sessions.authenticate(&bearer(&refreshed.token)).unwrap(), user_id);

    sessions.revoke(&bearer(&login.refresh_token)).await.unwrap();

    assert!(matches!(
        sessions.refresh(&bearer(&login.refresh_token)).await,
        Err(AppError::UnauthorizedBadRefreshToken)
    ));
    assert!(matches!(
        sessions.revoke(&bearer(&login.refresh_token)).await,
        Err(AppError::UnauthorizedBadRefreshToken)
    ));

    // Session tokens already issued stay valid until they expire
    assert!(sessions.authenticate(&bearer(&refreshed.token)).is_ok());
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let (sessions, _) = session_with_alice().await;

    let wrong = sessions
        .login(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "secret124".to_string(),
        })
        .await
        .unwrap_err();
    let unknown = sessions
        .login(LoginRequest {
            email: "bob@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(wrong, AppError::UnauthorizedLogin));
    assert!(matches!(unknown, AppError::UnauthorizedLogin));
    assert_eq!(wrong.message(), unknown.message());
}

#[tokio::test]
async fn test_expired_refresh_token_is_rejected() {
    let (sessions, refresh_tokens) = session_with_alice().await;

    let login = sessions
        .login(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();

    refresh_tokens.expire(&login.refresh_token);

    assert!(matches!(
        sessions.refresh(&bearer(&login.refresh_token)).await,
        Err(AppError::UnauthorizedBadRefreshToken)
    ));
}

#[tokio::test]
async fn test_missing_headers() {
    let (sessions, _) = session_with_alice().await;
    let empty = HeaderMap::new();

    assert!(matches!(
        sessions.authenticate(&empty),
        Err(AppError::UnauthorizedBadJwt)
    ));
    assert!(matches!(
        sessions.refresh(&empty).await,
        Err(AppError::UnauthorizedBadRefreshToken)
    ));
    assert!(matches!(
        sessions.revoke(&empty).await,
        Err(AppError::UnauthorizedBadRefreshToken)
    ));
    assert!(matches!(
        sessions.authenticate_webhook(&empty),
        Err(AppError::UnauthorizedBadApiKey)
    ));
}

#[tokio::test]
async fn test_webhook_key() {
    let (sessions, _) = session_with_alice().await;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey polka-key"));
    assert!(sessions.authenticate_webhook(&headers).is_ok());

    headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey polka-kez"));
    assert!(matches!(
        sessions.authenticate_webhook(&headers),
        Err(AppError::UnauthorizedBadApiKey)
    ));
}
