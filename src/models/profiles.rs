use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Free-form string lists (skills, languages) stored as JSONB arrays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

/// SeaORM entity for the `profiles` table. Exactly one row per user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: StringList,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub languages: StringList,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Partial update for PUT /api/profiles/me. Absent fields are left alone.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub languages: Option<Vec<String>>,
}
