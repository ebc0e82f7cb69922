use sea_orm::*;
use uuid::Uuid;

use crate::models::reviews::{self, CreateReview};
use crate::models::services;
use crate::models::users;

/// Whether the user has already reviewed the service. The unique index on
/// (service_id, user_id) backs this check up under concurrency.
pub async fn exists_for_service_and_user(
    db: &DatabaseConnection,
    service_id: Uuid,
    user_id: Uuid,
) -> Result<bool, DbErr> {
    let review = reviews::Entity::find()
        .filter(reviews::Column::ServiceId.eq(service_id))
        .filter(reviews::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    Ok(review.is_some())
}

/// All reviews for a service with their authors, newest first.
pub async fn get_for_service_with_authors(
    db: &DatabaseConnection,
    service_id: Uuid,
) -> Result<Vec<(reviews::Model, Option<users::Model>)>, DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::ServiceId.eq(service_id))
        .order_by_desc(reviews::Column::CreatedAt)
        .find_also_related(users::Entity)
        .all(db)
        .await
}

/// Arithmetic mean of the star ratings; 0 for an empty slice (a service
/// with no reviews keeps its default rating).
fn average_star(reviews: &[reviews::Model]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    reviews.iter().map(|r| f64::from(r.star)).sum::<f64>() / reviews.len() as f64
}

/// Insert a review and recompute the owning service's rating/num_reviews
/// from a full scan of its reviews. Both steps run inside one transaction
/// so concurrent submissions cannot interleave their read and write phases.
pub async fn insert_and_refresh_rating(
    db: &DatabaseConnection,
    input: CreateReview,
) -> Result<reviews::Model, DbErr> {
    let txn = db.begin().await?;

    let new_review = reviews::ActiveModel {
        id: Set(Uuid::new_v4()),
        service_id: Set(input.service_id),
        user_id: Set(input.user_id),
        star: Set(input.star),
        comment: Set(input.comment),
        created_at: Set(chrono::Utc::now()),
    };
    let review = new_review.insert(&txn).await?;

    let all_reviews = reviews::Entity::find()
        .filter(reviews::Column::ServiceId.eq(input.service_id))
        .all(&txn)
        .await?;

    let service = services::Entity::find_by_id(input.service_id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Service not found".to_string()))?;

    let mut active: services::ActiveModel = service.into();
    active.rating = Set(average_star(&all_reviews));
    active.num_reviews = Set(all_reviews.len() as i32);
    active.update(&txn).await?;

    txn.commit().await?;

    Ok(review)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(star: i32) -> reviews::Model {
        reviews::Model {
            id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            star,
            comment: String::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn average_of_no_reviews_is_zero() {
        assert_eq!(average_star(&[]), 0.0);
    }

    #[test]
    fn single_review_sets_the_average_to_its_star() {
        assert_eq!(average_star(&[review(5)]), 5.0);
    }

    #[test]
    fn average_is_the_arithmetic_mean() {
        let reviews = [review(5), review(4), review(3)];
        assert_eq!(average_star(&reviews), 4.0);

        let reviews = [review(5), review(4)];
        assert_eq!(average_star(&reviews), 4.5);
    }
}
