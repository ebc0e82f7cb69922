use sea_orm::*;
use uuid::Uuid;

use crate::models::profiles::{self, StringList, UpdateProfile};

/// Defaults applied when a profile row is first created.
const DEFAULT_BIO: &str = "New member";
const DEFAULT_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";

/// Fetch a profile by its owning user.
pub async fn find_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<profiles::Model>, DbErr> {
    profiles::Entity::find()
        .filter(profiles::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Insert a fresh profile with default contents for `user_id`.
pub async fn insert_default(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<profiles::Model, DbErr> {
    let new_profile = profiles::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        bio: Set(DEFAULT_BIO.to_string()),
        skills: Set(StringList::default()),
        phone_number: Set(None),
        avatar_url: Set(Some(DEFAULT_AVATAR_URL.to_string())),
        location: Set(None),
        languages: Set(StringList::default()),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_profile.insert(db).await
}

/// Fetch the user's profile, creating the default one on first access.
/// Idempotent from the caller's side: first call creates, later calls read.
pub async fn get_or_create(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<profiles::Model, DbErr> {
    if let Some(existing) = find_by_user(db, user_id).await? {
        return Ok(existing);
    }

    insert_default(db, user_id).await
}

/// Apply a partial update to the user's profile, creating it if absent,
/// and return the post-update row.
pub async fn upsert(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpdateProfile,
) -> Result<profiles::Model, DbErr> {
    let profile = get_or_create(db, user_id).await?;

    let mut active: profiles::ActiveModel = profile.into();

    if let Some(bio) = input.bio {
        active.bio = Set(bio);
    }
    if let Some(skills) = input.skills {
        active.skills = Set(StringList(skills));
    }
    if let Some(phone_number) = input.phone_number {
        active.phone_number = Set(Some(phone_number));
    }
    if let Some(avatar_url) = input.avatar_url {
        active.avatar_url = Set(Some(avatar_url));
    }
    if let Some(location) = input.location {
        active.location = Set(Some(location));
    }
    if let Some(languages) = input.languages {
        active.languages = Set(StringList(languages));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
