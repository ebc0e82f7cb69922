use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt::{self, JwtConfig};
use crate::db::users as user_db;
use crate::models::users;

/// The authenticated caller, resolved from the Bearer token before the
/// handler runs. The hash on the inner model never reaches responses:
/// handlers serialize through the response DTOs.
pub struct AuthenticatedUser(pub users::Model);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized("Missing Authorization header")
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
            })?;

            // 2. Get the signing config from app data.
            let jwt_config = req.app_data::<web::Data<JwtConfig>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("JWT config not configured")
            })?;

            // 3. Validate the signature and expiry.
            let claims = jwt::validate_token(token, &jwt_config.secret)
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            // 4. Extract the subject user id.
            let user_id = claims
                .user_id()
                .map_err(actix_web::error::ErrorUnauthorized)?;

            // 5. Get the database connection.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            // 6. Resolve the subject to a user row.
            let user = user_db::find_by_id(db.get_ref(), user_id)
                .await
                .map_err(|e| {
                    actix_web::error::ErrorInternalServerError(format!("Database error: {e}"))
                })?
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized("Token subject no longer exists")
                })?;

            Ok(AuthenticatedUser(user))
        })
    }
}
