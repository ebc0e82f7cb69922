use sea_orm::*;
use uuid::Uuid;

use crate::models::orders::{self, OrderStatus};
use crate::models::services;

/// Create an order for `buyer_id`, capturing the service's current price
/// and seller. There is no payment step: the order is written as completed
/// and paid.
pub async fn insert_order(
    db: &DatabaseConnection,
    buyer_id: Uuid,
    service: &services::Model,
) -> Result<orders::Model, DbErr> {
    let new_order = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        buyer_id: Set(buyer_id),
        service_id: Set(service.id),
        seller_id: Set(service.seller_id),
        total_price: Set(service.price),
        status: Set(OrderStatus::Completed),
        is_paid: Set(true),
        created_at: Set(chrono::Utc::now()),
    };

    new_order.insert(db).await
}

/// Orders the user placed, each joined with its service.
pub async fn purchases_with_services(
    db: &DatabaseConnection,
    buyer_id: Uuid,
) -> Result<Vec<(orders::Model, Option<services::Model>)>, DbErr> {
    orders::Entity::find()
        .filter(orders::Column::BuyerId.eq(buyer_id))
        .find_also_related(services::Entity)
        .all(db)
        .await
}

/// Orders other users placed on the user's services, each joined with its
/// service.
pub async fn sales_with_services(
    db: &DatabaseConnection,
    seller_id: Uuid,
) -> Result<Vec<(orders::Model, Option<services::Model>)>, DbErr> {
    orders::Entity::find()
        .filter(orders::Column::SellerId.eq(seller_id))
        .find_also_related(services::Entity)
        .all(db)
        .await
}

/// Whether the user has a completed order for the service. Purchasing is
/// the precondition for reviewing.
pub async fn has_completed_order(
    db: &DatabaseConnection,
    service_id: Uuid,
    buyer_id: Uuid,
) -> Result<bool, DbErr> {
    let order = orders::Entity::find()
        .filter(orders::Column::ServiceId.eq(service_id))
        .filter(orders::Column::BuyerId.eq(buyer_id))
        .filter(orders::Column::Status.eq(OrderStatus::Completed))
        .one(db)
        .await?;

    Ok(order.is_some())
}
