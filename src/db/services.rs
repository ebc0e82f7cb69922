use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::*;
use uuid::Uuid;

use crate::models::services::{self, NewService};
use crate::models::users;

/// Insert a new service owned by `seller_id`. Aggregates start at zero.
pub async fn insert_service(
    db: &DatabaseConnection,
    input: NewService,
    seller_id: Uuid,
) -> Result<services::Model, DbErr> {
    let new_service = services::ActiveModel {
        id: Set(Uuid::new_v4()),
        seller_id: Set(seller_id),
        title: Set(input.title),
        description: Set(input.description),
        price: Set(input.price),
        category: Set(input.category),
        image: Set(input.image),
        rating: Set(0.0),
        num_reviews: Set(0),
        created_at: Set(chrono::Utc::now()),
    };

    new_service.insert(db).await
}

/// List services with their sellers, optionally filtered by a
/// case-insensitive substring of the title.
pub async fn search_with_sellers(
    db: &DatabaseConnection,
    keyword: Option<String>,
) -> Result<Vec<(services::Model, Option<users::Model>)>, DbErr> {
    let mut query = services::Entity::find();

    if let Some(keyword) = keyword.filter(|k| !k.trim().is_empty()) {
        query = query.filter(
            Expr::col((services::Entity, services::Column::Title)).ilike(format!("%{keyword}%")),
        );
    }

    query.find_also_related(users::Entity).all(db).await
}

/// Fetch a single service by ID.
pub async fn get_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<services::Model>, DbErr> {
    services::Entity::find_by_id(id).one(db).await
}

/// Fetch a single service joined with its seller.
pub async fn get_with_seller(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<(services::Model, Option<users::Model>)>, DbErr> {
    services::Entity::find_by_id(id)
        .find_also_related(users::Entity)
        .one(db)
        .await
}

/// Fetch all services owned by one seller.
pub async fn get_by_seller(
    db: &DatabaseConnection,
    seller_id: Uuid,
) -> Result<Vec<services::Model>, DbErr> {
    services::Entity::find()
        .filter(services::Column::SellerId.eq(seller_id))
        .all(db)
        .await
}

/// Delete a service by ID. Orders and reviews referencing it are left in
/// place (they carry their own denormalized data).
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    services::Entity::delete_by_id(id).exec(db).await
}
