use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::orders as order_db;
use crate::db::services as service_db;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::orders::{MyOrders, PurchaseView, SaleView, ServiceSummary};
use crate::models::users::UserSummary;

/// POST /api/orders/{service_id} — buy a service.
///
/// There is no payment gateway: a successful purchase immediately creates
/// a completed, paid order. Failures create nothing.
pub async fn place_order(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let buyer_id = user.0.id;
    let service_id = path.into_inner();

    // 1. The service must exist.
    let service = service_db::get_by_id(db.get_ref(), service_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Service {service_id} not found")))?;

    // 2. Guard against orphaned records: a service whose seller row is gone
    //    cannot be bought.
    if user_db::find_by_id(db.get_ref(), service.seller_id)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation(
            "This service is not attached to a valid seller".to_string(),
        ));
    }

    // 3. Buying your own service is not allowed.
    if service.seller_id == buyer_id {
        return Err(ApiError::Validation(
            "You cannot buy your own service".to_string(),
        ));
    }

    // 4. Create the order. The price is captured now; later edits to the
    //    service never reach past orders.
    let order = order_db::insert_order(db.get_ref(), buyer_id, &service).await?;

    Ok(HttpResponse::Created().json(order))
}

/// GET /api/orders/my-orders — the caller's purchases and sales, plus the
/// total they have spent.
pub async fn get_my_orders(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let user_id = user.0.id;

    // Purchases: orders where the caller is the buyer.
    let purchases = order_db::purchases_with_services(db.get_ref(), user_id).await?;
    // Sales: orders where the caller is the seller.
    let sales = order_db::sales_with_services(db.get_ref(), user_id).await?;

    // Resolve all counterparties (sellers of purchases, buyers of sales)
    // in a single query.
    let mut counterparty_ids: Vec<Uuid> = purchases
        .iter()
        .map(|(order, _)| order.seller_id)
        .chain(sales.iter().map(|(order, _)| order.buyer_id))
        .collect();
    counterparty_ids.sort_unstable();
    counterparty_ids.dedup();

    let counterparties: HashMap<Uuid, UserSummary> =
        user_db::find_by_ids(db.get_ref(), counterparty_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, UserSummary::from(u)))
            .collect();

    let total_spent: f64 = purchases.iter().map(|(order, _)| order.total_price).sum();

    let purchases: Vec<PurchaseView> = purchases
        .into_iter()
        .map(|(order, service)| PurchaseView {
            seller: counterparties.get(&order.seller_id).cloned(),
            service: service.map(ServiceSummary::from),
            order,
        })
        .collect();

    let sales: Vec<SaleView> = sales
        .into_iter()
        .map(|(order, service)| SaleView {
            buyer: counterparties.get(&order.buyer_id).cloned(),
            service: service.map(ServiceSummary::from),
            order,
        })
        .collect();

    Ok(HttpResponse::Ok().json(MyOrders {
        purchases,
        sales,
        total_spent,
    }))
}
