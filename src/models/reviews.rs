use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::users::UserSummary;

/// SeaORM entity for the `reviews` table. Reviews are immutable once
/// written; there are no update or delete paths.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub user_id: Uuid,
    /// 1–5, coerced at the handler.
    pub star: i32,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
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
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Author,
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Insert input for a validated review submission.
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub star: i32,
    pub comment: String,
}

/// A review joined with its author's public slice.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithAuthor {
    #[serde(flatten)]
    pub review: Model,
    pub author: Option<UserSummary>,
}

/// Star ratings are coerced into the valid range rather than rejected.
pub fn clamp_star(raw: i32) -> i32 {
    raw.clamp(1, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_stars_pass_through() {
        assert_eq!(clamp_star(1), 1);
        assert_eq!(clamp_star(3), 3);
        assert_eq!(clamp_star(5), 5);
    }

    #[test]
    fn out_of_range_stars_are_clamped() {
        assert_eq!(clamp_star(0), 1);
        assert_eq!(clamp_star(-7), 1);
        assert_eq!(clamp_star(6), 5);
        assert_eq!(clamp_star(100), 5);
    }
}
