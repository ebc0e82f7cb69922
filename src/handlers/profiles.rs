use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::profiles as profile_db;
use crate::error::ApiError;
use crate::models::profiles::UpdateProfile;

/// GET /api/profiles/me — the caller's profile, created on first access.
pub async fn get_my_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let profile = profile_db::get_or_create(db.get_ref(), user.0.id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /api/profiles/me — update the caller's profile, creating it first
/// if it does not exist yet.
pub async fn update_my_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdateProfile>,
) -> Result<HttpResponse, ApiError> {
    let profile = profile_db::upsert(db.get_ref(), user.0.id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}
