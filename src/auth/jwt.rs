use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the tokens this server issues at register/login.
///
/// Tokens are stateless HS256 credentials: there is no server-side session
/// store and no refresh path, only the fixed validity window.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user's UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
}

impl Claims {
    /// Extract the user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }
}

/// Signing configuration, wired through Actix app data.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_days: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let ttl_days = std::env::var("TOKEN_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self { secret, ttl_days }
    }
}

/// Issue an HS256 token for `user_id`, valid for `ttl_days` days.
pub fn generate_token(user_id: Uuid, secret: &str, ttl_days: i64) -> Result<String, String> {
    let now = chrono::Utc::now();
    let expires = now
        .checked_add_signed(chrono::Duration::days(ttl_days))
        .ok_or("Failed to compute token expiry")?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expires.timestamp() as usize,
        iat: Some(now.timestamp() as usize),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to encode token: {e}"))
}

/// Validate an HS256 token's signature and expiry, returning its claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Token validation failed: {e}"))
}
