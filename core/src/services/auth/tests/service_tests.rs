//! Session lifecycle tests driving the orchestrator through the mocks

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::AccessClaims;
use crate::domain::entities::user::{User, UserSnapshot};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockRevocationCache, MockTokenRepository, MockUserRepository};
use crate::services::auth::AuthService;
use crate::services::token::{Signer, TokenConfig};

struct Harness {
    service: AuthService<MockUserRepository, MockTokenRepository, MockRevocationCache>,
    users: Arc<MockUserRepository>,
    tokens: Arc<MockTokenRepository>,
    config: TokenConfig,
}

fn test_config() -> TokenConfig {
    TokenConfig {
        secret: "orchestrator-test-secret".to_string(),
        ..TokenConfig::default()
    }
}

fn harness() -> Harness {
    let config = test_config();
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(MockTokenRepository::new());
    let cache = Arc::new(MockRevocationCache::new());

    Harness {
        service: AuthService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            cache,
            config.clone(),
        )
        .unwrap(),
        users,
        tokens,
        config,
    }
}

async fn registered_user(h: &Harness) -> User {
    let user = User::new("user@example.com");
    h.users.insert(user.clone()).await;
    user
}

#[tokio::test]
async fn login_issues_a_usable_pair() {
    let h = harness();
    let user = registered_user(&h).await;

    let pair = h.service.login(&user).await.unwrap();
    assert_eq!(pair.token_type, "Bearer");
    assert_eq!(pair.access_expires_in, h.config.access_token_ttl_minutes * 60);
    assert_eq!(
        pair.refresh_expires_in,
        h.config.refresh_token_ttl_minutes * 60
    );

    h.service.check_access(&pair.access_token).await.unwrap();
    assert_eq!(h.tokens.len().await, 1);
}

#[tokio::test]
async fn refresh_rotates_the_pair() {
    let h = harness();
    let user = registered_user(&h).await;

    let old = h.service.login(&user).await.unwrap();
    let new = h.service.refresh(&old.refresh_token).await.unwrap();

    assert_ne!(old.refresh_token, new.refresh_token);
    assert_ne!(old.access_token, new.access_token);
    h.service.check_access(&new.access_token).await.unwrap();
}

#[tokio::test]
async fn refresh_token_is_single_use() {
    let h = harness();
    let user = registered_user(&h).await;

    let old = h.service.login(&user).await.unwrap();
    h.service.refresh(&old.refresh_token).await.unwrap();

    let err = h.service.refresh(&old.refresh_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedRefreshToken)
    ));
}

#[tokio::test]
async fn rotation_kills_the_old_access_token() {
    let h = harness();
    let user = registered_user(&h).await;

    let old = h.service.login(&user).await.unwrap();
    h.service.refresh(&old.refresh_token).await.unwrap();

    let err = h.service.check_access(&old.access_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedAccessToken)
    ));
}

#[tokio::test]
async fn refresh_for_a_deleted_user_fails() {
    let h = harness();

    // Not registered in the user store at all.
    let user = User::new("ghost@example.com");
    let pair = h.service.login(&user).await.unwrap();

    let err = h.service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let h = harness();
    let user = registered_user(&h).await;
    let pair = h.service.login(&user).await.unwrap();

    h.service.logout(&pair.access_token).await.unwrap();

    let err = h.service.check_access(&pair.access_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedAccessToken)
    ));
    let err = h.service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedRefreshToken)
    ));
}

#[tokio::test]
async fn repeated_logout_is_rejected() {
    let h = harness();
    let user = registered_user(&h).await;
    let pair = h.service.login(&user).await.unwrap();

    h.service.logout(&pair.access_token).await.unwrap();

    // The access token died with its session; it cannot log out again.
    let err = h.service.logout(&pair.access_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RevokedAccessToken)
    ));
}

#[tokio::test]
async fn logout_all_ends_every_session_of_the_user() {
    let h = harness();
    let user = registered_user(&h).await;
    let bystander = registered_user(&h).await;

    let first = h.service.login(&user).await.unwrap();
    let second = h.service.login(&user).await.unwrap();
    let third = h.service.login(&user).await.unwrap();
    let other = h.service.login(&bystander).await.unwrap();

    let count = h.service.logout_all(&first.access_token).await.unwrap();
    assert_eq!(count, 3);

    for pair in [&first, &second, &third] {
        let err = h.service.check_access(&pair.access_token).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::RevokedAccessToken)
        ));
    }
    h.service.check_access(&other.access_token).await.unwrap();
}

#[tokio::test]
async fn login_after_logout_all_starts_fresh() {
    let h = harness();
    let user = registered_user(&h).await;

    let pair = h.service.login(&user).await.unwrap();
    h.service.logout_all(&pair.access_token).await.unwrap();

    let fresh = h.service.login(&user).await.unwrap();
    h.service.check_access(&fresh.access_token).await.unwrap();
}

#[tokio::test]
async fn concurrent_sessions_revoke_independently() {
    let h = harness();
    let user = registered_user(&h).await;

    let first = h.service.login(&user).await.unwrap();
    let second = h.service.login(&user).await.unwrap();

    h.service.logout(&first.access_token).await.unwrap();

    assert!(h.service.check_access(&first.access_token).await.is_err());
    h.service.check_access(&second.access_token).await.unwrap();
    h.service.refresh(&second.refresh_token).await.unwrap();
}

#[tokio::test]
async fn expired_access_token_is_rejected() {
    let h = harness();
    let signer = Signer::new(&test_config()).unwrap();

    let mut claims = AccessClaims::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        UserSnapshot {
            is_active: true,
            is_verified: true,
            is_superuser: false,
        },
        15,
    );
    claims.iat = Utc::now().timestamp() - 120;
    claims.exp = Utc::now().timestamp() - 60;
    let token = signer.encode(&claims).unwrap();

    let err = h.service.check_access(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn tampered_access_token_is_rejected() {
    let h = harness();
    let user = registered_user(&h).await;
    let pair = h.service.login(&user).await.unwrap();

    let mut tampered = pair.access_token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let err = h.service.check_access(&tampered).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}
