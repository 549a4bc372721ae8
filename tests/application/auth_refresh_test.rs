use crate::common;
use crate::setup_test_db_or_skip;
use chirpy::application::auth::refresh::RefreshTokenUseCase;
use chirpy::application::auth::refresh_tokens::RefreshTokenStore;
use chirpy::application::auth::revoke::RevokeTokenUseCase;
use chirpy::domain::auth::TokenSigner;
use chirpy::domain::users::{NewUser, UserRepository};
use chirpy::infrastructure::auth::JwtTokenSigner;
use chirpy::infrastructure::repositories::refresh_tokens::PostgresRefreshTokenRepository;
use chirpy::infrastructure::repositories::users::PostgresUserRepository;
use chirpy::shared::error::AppError;
use serial_test::serial;
use std::sync::Arc;

#[tokio::test]
#[serial]
async fn test_refresh_then_revoke() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let user = PostgresUserRepository::new(pool.clone())
        .create(NewUser {
            email: "refresh@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();

    let store = RefreshTokenStore::new(Arc::new(PostgresRefreshTokenRepository::new(pool.clone())));
    let signer = Arc::new(JwtTokenSigner::new(common::TEST_JWT_SECRET.as_bytes()));
    let refresh = RefreshTokenUseCase::new(store.clone(), signer.clone(), time::Duration::hours(1));
    let revoke = RevokeTokenUseCase::new(store.clone());

    let issued = store.issue(user.id).await.unwrap();
    assert_eq!(issued.token.len(), 64);

    let response = refresh.execute(&issued.token).await.unwrap();
    assert_eq!(signer.validate(&response.token).unwrap(), user.id);

    // Not rotated; still usable
    assert!(refresh.execute(&issued.token).await.is_ok());

    revoke.execute(&issued.token).await.unwrap();

    assert!(matches!(
        refresh.execute(&issued.token).await,
        Err(AppError::UnauthorizedBadRefreshToken)
    ));
    assert!(matches!(
        revoke.execute(&issued.token).await,
        Err(AppError::UnauthorizedBadRefreshToken)
    ));

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_refresh_unknown_token() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let store = RefreshTokenStore::new(Arc::new(PostgresRefreshTokenRepository::new(pool.clone())));
    let signer = Arc::new(JwtTokenSigner::new(common::TEST_JWT_SECRET.as_bytes()));
    let refresh = RefreshTokenUseCase::new(store, signer, time::Duration::hours(1));

    assert!(matches!(
        refresh.execute("deadbeef").await,
        Err(AppError::UnauthorizedBadRefreshToken)
    ));

    common::cleanup_test_db(&pool).await;
}
