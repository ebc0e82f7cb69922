use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::authorization::verify_service_owner;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::reviews as review_db;
use crate::db::services as service_db;
use crate::error::ApiError;
use crate::models::reviews::ReviewWithAuthor;
use crate::models::services::{Category, NewService, ServiceDetail, ServiceWithSeller};
use crate::models::users::UserSummary;
use crate::upload::{self, UploadDir};

/// GET /api/services — list all services with their sellers (public).
/// Query params: ?keyword=logo filters by title, case-insensitively.
pub async fn get_services(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ServiceListQuery>,
) -> Result<HttpResponse, ApiError> {
    let rows = service_db::search_with_sellers(db.get_ref(), query.into_inner().keyword).await?;

    let services: Vec<ServiceWithSeller> = rows
        .into_iter()
        .map(|(service, seller)| ServiceWithSeller {
            service,
            seller: seller.map(UserSummary::from),
        })
        .collect();

    Ok(HttpResponse::Ok().json(services))
}

/// GET /api/services/my-services — services owned by the caller.
pub async fn get_my_services(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let services = service_db::get_by_seller(db.get_ref(), user.0.id).await?;
    Ok(HttpResponse::Ok().json(services))
}

/// GET /api/services/{id} — one service with its seller and its reviews,
/// newest review first (public).
pub async fn get_service(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let (service, seller) = service_db::get_with_seller(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Service {id} not found")))?;

    let reviews: Vec<ReviewWithAuthor> = review_db::get_for_service_with_authors(db.get_ref(), id)
        .await?
        .into_iter()
        .map(|(review, author)| ReviewWithAuthor {
            review,
            author: author.map(UserSummary::from),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ServiceDetail {
        service,
        seller: seller.map(UserSummary::from),
        reviews,
    }))
}

/// POST /api/services — create a service from a multipart form. Requires
/// authentication and a successfully uploaded image.
pub async fn create_service(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    upload_dir: web::Data<UploadDir>,
    MultipartForm(form): MultipartForm<CreateServiceForm>,
) -> Result<HttpResponse, ApiError> {
    let CreateServiceForm {
        title,
        description,
        price,
        category,
        image,
    } = form;

    // 1. Every field plus the image is required.
    let (Some(title), Some(description), Some(price), Some(category), Some(image)) =
        (title, description, price, category, image)
    else {
        return Err(ApiError::Validation(
            "Please fill in all fields and attach an image".to_string(),
        ));
    };

    let price = price.into_inner();
    if !(price > 0.0) {
        return Err(ApiError::Validation(
            "Price must be a positive number".to_string(),
        ));
    }

    // 2. Category must be one of the catalog's fixed set.
    let category: Category = category.into_inner().parse().map_err(ApiError::Validation)?;

    // 3. Persist the image, then 4. the record pointing at it.
    let image_path = upload::save_image(upload_dir.get_ref(), &image)?;

    let service = service_db::insert_service(
        db.get_ref(),
        NewService {
            title: title.into_inner(),
            description: description.into_inner(),
            price,
            category,
            image: image_path,
        },
        user.0.id,
    )
    .await?;

    Ok(HttpResponse::Created().json(service))
}

/// DELETE /api/services/{id} — remove a service; owner only. Dependent
/// orders and reviews are intentionally left behind.
pub async fn delete_service(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    verify_service_owner(db.get_ref(), id, user.0.id).await?;

    service_db::delete_service(db.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Service {id} deleted"),
    })))
}

// ── Request DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceListQuery {
    pub keyword: Option<String>,
}

/// Multipart body for POST /api/services. Every field is optional at the
/// parsing layer so a missing one yields the catalog's 400 instead of a
/// deserialization failure.
#[derive(MultipartForm)]
pub struct CreateServiceForm {
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub price: Option<Text<f64>>,
    pub category: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}
