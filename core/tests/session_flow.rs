//! End-to-end session lifecycle against the in-memory stores.
//!
//! Drives the public API the way a request layer would: login, use the
//! access token, rotate, log out, and verify every stale credential is
//! rejected with the expected error.

use std::sync::Arc;

use auth_core::{
    AuthService, DomainError, MockRevocationCache, MockTokenRepository, MockUserRepository,
    TokenConfig, TokenError, User,
};

fn build_service() -> (
    AuthService<MockUserRepository, MockTokenRepository, MockRevocationCache>,
    Arc<MockUserRepository>,
) {
    let users = Arc::new(MockUserRepository::new());
    let config = TokenConfig {
        secret: "integration-test-secret".to_string(),
        ..TokenConfig::default()
    };
    let service = AuthService::new(
        Arc::clone(&users),
        Arc::new(MockTokenRepository::new()),
        Arc::new(MockRevocationCache::new()),
        config,
    )
    .unwrap();
    (service, users)
}

#[tokio::test]
async fn full_session_lifecycle() {
    let (service, users) = build_service();
    let user = User::new("lifecycle@example.com");
    users.insert(user.clone()).await;

    // Login yields a working pair.
    let first = service.login(&user).await.unwrap();
    service.check_access(&first.access_token).await.unwrap();

    // Rotation: new pair works, old pair is dead on both sides.
    let second = service.refresh(&first.refresh_token).await.unwrap();
    service.check_access(&second.access_token).await.unwrap();

    let err = service.refresh(&first.refresh_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedRefreshToken)
    ));
    let err = service.check_access(&first.access_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedAccessToken)
    ));

    // Logout kills the current pair too.
    service.logout(&second.access_token).await.unwrap();
    let err = service.check_access(&second.access_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedAccessToken)
    ));
    let err = service.refresh(&second.refresh_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedRefreshToken)
    ));

    // A fresh login is unaffected by the dead history.
    let third = service.login(&user).await.unwrap();
    service.check_access(&third.access_token).await.unwrap();
}

#[tokio::test]
async fn logout_all_across_devices() {
    let (service, users) = build_service();
    let user = User::new("devices@example.com");
    users.insert(user.clone()).await;

    let phone = service.login(&user).await.unwrap();
    let laptop = service.login(&user).await.unwrap();
    let tablet = service.login(&user).await.unwrap();

    let count = service.logout_all(&phone.access_token).await.unwrap();
    assert_eq!(count, 3);

    for pair in [&phone, &laptop, &tablet] {
        assert!(service.check_access(&pair.access_token).await.is_err());
        assert!(service.refresh(&pair.refresh_token).await.is_err());
    }
}

#[tokio::test]
async fn sessions_of_different_users_are_isolated() {
    let (service, users) = build_service();
    let alice = User::new("alice@example.com");
    let bob = User::new("bob@example.com");
    users.insert(alice.clone()).await;
    users.insert(bob.clone()).await;

    let alice_pair = service.login(&alice).await.unwrap();
    let bob_pair = service.login(&bob).await.unwrap();

    service.logout_all(&alice_pair.access_token).await.unwrap();

    assert!(service.check_access(&alice_pair.access_token).await.is_err());
    service.check_access(&bob_pair.access_token).await.unwrap();
    service.refresh(&bob_pair.refresh_token).await.unwrap();
}
