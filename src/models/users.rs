use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Services the user has bookmarked, stored as a JSONB array of ids.
/// No endpoints mutate this yet; it rides along on the user record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Favorites(pub Vec<Uuid>);

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// PBKDF2 hash. Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_admin: bool,
    pub profile_id: Option<Uuid>,
    #[sea_orm(column_type = "JsonBinary")]
    pub favorites: Favorites,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::services::Entity")]
    Services,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_one = "super::profiles::Entity")]
    Profile,
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Services.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Insert input for registration. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A safe user representation for API responses (never leaks the hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub profile_id: Option<Uuid>,
    pub favorites: Favorites,
    pub created_at: DateTimeUtc,
}

impl From<Model> for UserResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            is_admin: m.is_admin,
            profile_id: m.profile_id,
            favorites: m.favorites,
            created_at: m.created_at,
        }
    }
}

/// The slice of a user other users get to see when records are joined
/// (seller on a listing, author on a review, counterparty on an order).
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<Model> for UserSummary {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
        }
    }
}
