use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::users::UserSummary;

/// Order status stored as a lowercase string in the database.
///
/// No payment step is modeled: orders are written as `completed` and paid
/// at creation, so the other variants exist only for forward compatibility
/// of the stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum OrderStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// SeaORM entity for the `orders` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub service_id: Uuid,
    /// Copied from the service at purchase time.
    pub seller_id: Uuid,
    /// The service's price at the instant of purchase; later price edits
    /// never reach past orders.
    #[sea_orm(column_type = "Double")]
    pub total_price: f64,
    pub status: OrderStatus,
    pub is_paid: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ServiceId",
        to = "super::services::Column::Id"
    )]
    Service,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BuyerId",
        to = "super::users::Column::Id"
    )]
    Buyer,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SellerId",
        to = "super::users::Column::Id"
    )]
    Seller,
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buyer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// The slice of a service shown inside an order listing.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSummary {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl From<super::services::Model> for ServiceSummary {
    fn from(m: super::services::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            price: m.price,
            image: m.image,
        }
    }
}

/// An order the caller placed, with the service and its seller joined in.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseView {
    #[serde(flatten)]
    pub order: Model,
    pub service: Option<ServiceSummary>,
    pub seller: Option<UserSummary>,
}

/// An order placed on one of the caller's services, with the buyer joined in.
#[derive(Debug, Clone, Serialize)]
pub struct SaleView {
    #[serde(flatten)]
    pub order: Model,
    pub service: Option<ServiceSummary>,
    pub buyer: Option<UserSummary>,
}

/// Response for GET /api/orders/my-orders.
#[derive(Debug, Clone, Serialize)]
pub struct MyOrders {
    pub purchases: Vec<PurchaseView>,
    pub sales: Vec<SaleView>,
    pub total_spent: f64,
}
