use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, CreateUser, Favorites};

/// Insert a new user with a freshly generated id.
pub async fn insert_user(db: &DatabaseConnection, input: CreateUser) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(input.username),
        email: Set(input.email),
        password: Set(input.password),
        is_admin: Set(false),
        profile_id: Set(None),
        favorites: Set(Favorites::default()),
        created_at: Set(chrono::Utc::now()),
    };

    new_user.insert(db).await
}

/// Fetch a single user by ID.
pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch a user by email (unique across all users).
pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
}

/// Fetch several users at once, for joining counterparties onto orders.
pub async fn find_by_ids(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<users::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await
}

/// Point the user at their profile row (set once at registration).
pub async fn set_profile_ref(
    db: &DatabaseConnection,
    user: users::Model,
    profile_id: Uuid,
) -> Result<users::Model, DbErr> {
    let mut active: users::ActiveModel = user.into();
    active.profile_id = Set(Some(profile_id));

    active.update(db).await
}
