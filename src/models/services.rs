use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::reviews::ReviewWithAuthor;
use super::users::UserSummary;

/// SeaORM entity for the `services` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub category: Category,
    /// Relative path under the uploads directory.
    pub image: String,
    /// Derived from reviews; recomputed on every new review.
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub num_reviews: i32,
    pub created_at: DateTimeUtc,
}

/// The catalog's fixed category set, stored as a lowercase string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "design")]
    Design,
    #[sea_orm(string_value = "development")]
    Development,
    #[sea_orm(string_value = "marketing")]
    Marketing,
    #[sea_orm(string_value = "writing")]
    Writing,
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "design" => Ok(Self::Design),
            "development" => Ok(Self::Development),
            "marketing" => Ok(Self::Marketing),
            "writing" => Ok(Self::Writing),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SellerId",
        to = "super::users::Column::Id"
    )]
    Seller,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Insert input assembled from the validated multipart form.
#[derive(Debug, Clone)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub image: String,
}

/// A listing entry: the service plus its seller's public slice.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceWithSeller {
    #[serde(flatten)]
    pub service: Model,
    pub seller: Option<UserSummary>,
}

/// The detail view: service, seller, and all reviews newest-first.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: Model,
    pub seller: Option<UserSummary>,
    pub reviews: Vec<ReviewWithAuthor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Design".parse::<Category>().unwrap(), Category::Design);
        assert_eq!("writing".parse::<Category>().unwrap(), Category::Writing);
        assert_eq!("MARKETING".parse::<Category>().unwrap(), Category::Marketing);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!("plumbing".parse::<Category>().is_err());
    }
}
