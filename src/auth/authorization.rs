use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::services as service_db;
use crate::error::ApiError;
use crate::models::services;

/// Load a service and ensure `user_id` is its seller. Mutating someone
/// else's service yields 401, matching the catalog's delete contract.
pub async fn verify_service_owner(
    db: &DatabaseConnection,
    service_id: Uuid,
    user_id: Uuid,
) -> Result<services::Model, ApiError> {
    let service = service_db::get_by_id(db, service_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Service {service_id} not found")))?;

    if service.seller_id != user_id {
        return Err(ApiError::Unauthorized(
            "Not authorized to modify this service".to_string(),
        ));
    }

    Ok(service)
}
