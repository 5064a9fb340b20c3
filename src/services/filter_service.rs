// ============================================================================
// FILTER SERVICE - Reglas de precio (recargos y descuentos)
// ============================================================================

use crate::models::{CreateFilterRequest, PriceFilter};
use crate::services::http::{self, ApiError};

/// Todas las reglas de precio (solo admin)
pub async fn list_filters() -> Result<Vec<PriceFilter>, ApiError> {
    http::get_json("/filters").await
}

/// Reglas activas, las únicas que afectan al precio de una reserva
pub async fn list_active_filters() -> Result<Vec<PriceFilter>, ApiError> {
    let filters: Vec<PriceFilter> = http::get_json("/filters?active=true").await?;
    log::info!("💶 {} reglas de precio activas", filters.len());
    Ok(filters)
}

/// Crea una regla de precio
pub async fn create_filter(request: &CreateFilterRequest) -> Result<PriceFilter, ApiError> {
    log::info!("➕ Creando regla de precio: {}", request.name);
    http::post_json("/filters", request).await
}

/// Reemplaza la definición de una regla existente
pub async fn update_filter(
    id: &str,
    request: &CreateFilterRequest,
) -> Result<PriceFilter, ApiError> {
    http::put_json(&format!("/filters/{}", id), request).await
}

/// Activa o desactiva una regla sin tocar su definición
pub async fn set_filter_active(id: &str, active: bool) -> Result<PriceFilter, ApiError> {
    let request = SetActiveRequest { active };
    http::put_json(&format!("/filters/{}/active", id), &request).await
}

/// Elimina una regla de precio
pub async fn delete_filter(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/filters/{}", id)).await
}

#[derive(serde::Serialize)]
struct SetActiveRequest {
    active: bool,
}
