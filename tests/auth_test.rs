//! Integration test for JWT issuance and validation.
//!
//! Tokens are minted locally with the same HS256 secret the server would
//! use, then validated through the `validate_token` function. No running
//! server or database is needed.
//!
//! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use skillswap_backend::auth::jwt::{Claims, generate_token, validate_token};

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

#[test]
fn test_issued_token_round_trips() {
    let user_id = Uuid::new_v4();
    let token = generate_token(user_id, TEST_SECRET, 30).expect("Failed to issue test token");

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.user_id().unwrap(), user_id);

    // The expiry must land ~30 days out (the configured validity window).
    let now = Utc::now().timestamp() as usize;
    let twenty_nine_days = 29 * 24 * 3600;
    let thirty_one_days = 31 * 24 * 3600;
    assert!(claims.exp > now + twenty_nine_days);
    assert!(claims.exp < now + thirty_one_days);
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: Some(now - 3600),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = generate_token(Uuid::new_v4(), TEST_SECRET, 30).unwrap();

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_non_uuid_subject_is_rejected_at_resolution() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: "not-a-uuid".to_string(),
        exp: now + 3600,
        iat: Some(now),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    // Signature and expiry are fine, but the subject cannot name a user.
    let decoded = validate_token(&token, TEST_SECRET).expect("Token itself should validate");
    assert!(decoded.user_id().is_err());
}
