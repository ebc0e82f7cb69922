use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::orders as order_db;
use crate::db::reviews as review_db;
use crate::error::ApiError;
use crate::models::reviews::{CreateReview, clamp_star};

/// POST /api/reviews/{service_id} — review a purchased service.
pub async fn submit_review(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<SubmitReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = user.0.id;
    let service_id = path.into_inner();
    let input = body.into_inner();

    // 1. Reviews are purchase-gated: a completed order must exist.
    if !order_db::has_completed_order(db.get_ref(), service_id, user_id).await? {
        return Err(ApiError::Forbidden(
            "You must purchase this service before reviewing it".to_string(),
        ));
    }

    // 2. One review per user per service.
    if review_db::exists_for_service_and_user(db.get_ref(), service_id, user_id).await? {
        return Err(ApiError::Validation(
            "You have already reviewed this service".to_string(),
        ));
    }

    // 3. Create the review and refresh the service's aggregate rating in
    //    one transaction.
    review_db::insert_and_refresh_rating(
        db.get_ref(),
        CreateReview {
            service_id,
            user_id,
            star: clamp_star(input.rating),
            comment: input.comment,
        },
    )
    .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Review added",
    })))
}

// ── Request DTOs ──

/// Request body for POST /api/reviews/{service_id}.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReviewRequest {
    pub rating: i32,
    pub comment: String,
}
