use crate::common;
use crate::setup_test_db_or_skip;
use chirpy::application::auth::login::{LoginRequest, LoginUseCase};
use chirpy::application::auth::refresh_tokens::RefreshTokenStore;
use chirpy::domain::auth::{RefreshTokenRepository, TokenSigner};
use chirpy::domain::password::PasswordHashingService;
use chirpy::domain::users::{NewUser, UserRepository};
use chirpy::infrastructure::auth::JwtTokenSigner;
use chirpy::infrastructure::password::PasswordService;
use chirpy::infrastructure::repositories::refresh_tokens::PostgresRefreshTokenRepository;
use chirpy::infrastructure::repositories::users::PostgresUserRepository;
use chirpy::shared::error::AppError;
use serial_test::serial;
use std::sync::Arc;

fn build_use_case(
    pool: &sqlx::PgPool,
) -> (
    LoginUseCase,
    Arc<PostgresUserRepository>,
    Arc<PostgresRefreshTokenRepository>,
) {
    let user_repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    let refresh_repo = Arc::new(PostgresRefreshTokenRepository::new(pool.clone()));
    let signer = Arc::new(JwtTokenSigner::new(common::TEST_JWT_SECRET.as_bytes()));

    let use_case = LoginUseCase::new(
        user_repo.clone(),
        RefreshTokenStore::new(refresh_repo.clone()),
        signer,
        Arc::new(PasswordService::new()),
        time::Duration::hours(1),
    );
    (use_case, user_repo, refresh_repo)
}

#[tokio::test]
#[serial]
async fn test_login_success() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let (use_case, user_repo, refresh_repo) = build_use_case(&pool);

    let email = format!("login_{}@example.com", uuid::Uuid::new_v4());
    let hash = PasswordService::new().hash_password("password123").unwrap();
    let user = user_repo
        .create(NewUser {
            email: email.clone(),
            password_hash: hash,
        })
        .await
        .expect("Failed to create user");

    let response = use_case
        .execute(LoginRequest {
            email: email.clone(),
            password: "password123".to_string(),
        })
        .await
        .expect("Login failed");

    assert_eq!(response.id, user.id);
    assert_eq!(response.email, email);
    assert!(!response.is_chirpy_red);

    let signer = JwtTokenSigner::new(common::TEST_JWT_SECRET.as_bytes());
    assert_eq!(signer.validate(&response.token).unwrap(), user.id);

    let stored = refresh_repo
        .find_active(&response.refresh_token)
        .await
        .unwrap()
        .expect("Refresh token should be stored");
    assert_eq!(stored.user_id, user.id);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_login_invalid_credentials() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let (use_case, user_repo, _) = build_use_case(&pool);

    let hash = PasswordService::new().hash_password("password123").unwrap();
    user_repo
        .create(NewUser {
            email: "wrongpass@example.com".to_string(),
            password_hash: hash,
        })
        .await
        .unwrap();

    let wrong_password = use_case
        .execute(LoginRequest {
            email: "wrongpass@example.com".to_string(),
            password: "wrongpassword".to_string(),
        })
        .await;
    assert!(matches!(wrong_password, Err(AppError::UnauthorizedLogin)));

    let unknown_email = use_case
        .execute(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await;
    assert!(matches!(unknown_email, Err(AppError::UnauthorizedLogin)));

    common::cleanup_test_db(&pool).await;
}
