use crate::models::{CreateReviewRequest, Review};
use crate::services::http::{self, ApiError};

/// Reseñas de un apartamento, la más reciente primero
pub async fn list_reviews(apartment_id: &str) -> Result<Vec<Review>, ApiError> {
    let params = serde_urlencoded::to_string([("apartment_id", apartment_id)])
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    http::get_json(&format!("/reviews?{}", params)).await
}

/// Publica una reseña del usuario autenticado
pub async fn create_review(request: &CreateReviewRequest) -> Result<Review, ApiError> {
    log::info!(
        "⭐ Publicando reseña de {} estrellas para apartamento {}",
        request.rating,
        request.apartment_id
    );
    http::post_json("/reviews", request).await
}

/// Borra una reseña propia
pub async fn delete_review(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/reviews/{}", id)).await
}
