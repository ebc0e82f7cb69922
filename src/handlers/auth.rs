use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::jwt::{self, JwtConfig};
use crate::auth::middleware::AuthenticatedUser;
use crate::auth::password;
use crate::db::profiles as profile_db;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::users::{CreateUser, UserResponse};

/// POST /api/auth/register — create a user plus their profile, return a token.
pub async fn register(
    db: web::Data<DatabaseConnection>,
    jwt_config: web::Data<JwtConfig>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();

    if input.username.trim().is_empty() || input.email.trim().is_empty() || input.password.is_empty()
    {
        return Err(ApiError::Validation(
            "username, email and password are required".to_string(),
        ));
    }

    // 1. Reject duplicate emails before creating anything.
    if user_db::find_by_email(db.get_ref(), &input.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation(
            "This email is already in use".to_string(),
        ));
    }

    // 2. Hash the password.
    let hashed = password::hash_password(&input.password).map_err(ApiError::Internal)?;

    // 3. Create the user first so the profile has an id to reference,
    //    4. create the profile, 5. link it back onto the user.
    let user = user_db::insert_user(
        db.get_ref(),
        CreateUser {
            username: input.username,
            email: input.email,
            password: hashed,
        },
    )
    .await?;

    let profile = profile_db::insert_default(db.get_ref(), user.id).await?;
    let user = user_db::set_profile_ref(db.get_ref(), user, profile.id).await?;

    // 6. Issue the session token.
    let token = jwt::generate_token(user.id, &jwt_config.secret, jwt_config.ttl_days)
        .map_err(ApiError::Internal)?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        token,
    }))
}

/// POST /api/auth/login — verify credentials, return a fresh token.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    jwt_config: web::Data<JwtConfig>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();

    // Unknown email and wrong password produce the same response, so the
    // endpoint does not reveal which emails are registered.
    let user = user_db::find_by_email(db.get_ref(), &input.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Incorrect email or password".to_string()))?;

    let valid =
        password::verify_password(&input.password, &user.password).map_err(ApiError::Internal)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Incorrect email or password".to_string(),
        ));
    }

    let token = jwt::generate_token(user.id, &jwt_config.secret, jwt_config.ttl_days)
        .map_err(ApiError::Internal)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        is_admin: user.is_admin,
        token,
    }))
}

/// GET /api/auth/me — return the currently authenticated user.
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(UserResponse::from(user.0))
}

// ── Request/response DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub token: String,
}
