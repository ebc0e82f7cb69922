use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::ai::DescriptionGenerator;
use crate::error::ApiError;

/// GET /api/ai/generate-description — draft marketing copy for a service.
/// Query params: ?title=...&category=...
pub async fn generate_description(
    generator: web::Data<DescriptionGenerator>,
    query: web::Query<GenerateDescriptionQuery>,
) -> Result<HttpResponse, ApiError> {
    let params = query.into_inner();

    let title = params
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("A title is required".to_string()))?;
    let category = params.category.unwrap_or_default();

    let description = generator
        .generate(&title, &category)
        .await
        .map_err(ApiError::Internal)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "description": description,
    })))
}

// ── Request DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDescriptionQuery {
    pub title: Option<String>,
    pub category: Option<String>,
}
