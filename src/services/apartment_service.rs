use crate::models::{Apartment, ApartmentPage, ApartmentSearchQuery};
use crate::services::http::{self, ApiError};

/// Búsqueda paginada de apartamentos
pub async fn search_apartments(query: &ApartmentSearchQuery) -> Result<ApartmentPage, ApiError> {
    let params =
        serde_urlencoded::to_string(query).map_err(|e| ApiError::Parse(e.to_string()))?;
    let path = format!("/apartments/search?{}", params);

    log::info!("🔍 Buscando apartamentos: {}", path);

    let page: ApartmentPage = http::get_json(&path).await?;

    log::info!(
        "✅ {} apartamentos (página {} de {})",
        page.apartments.len(),
        page.page,
        page.total_pages()
    );

    Ok(page)
}

/// Ficha completa de un apartamento
pub async fn get_apartment(id: &str) -> Result<Apartment, ApiError> {
    http::get_json(&format!("/apartments/{}", id)).await
}

#[cfg(test)]
mod tests {
    use crate::models::ApartmentSearchQuery;

    #[test]
    fn query_string_omits_empty_fields() {
        let query = ApartmentSearchQuery {
            q: Some("piso centro".to_string()),
            ..Default::default()
        };
        let params = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(params, "q=piso+centro&page=1&per_page=12");
    }

    #[test]
    fn query_string_includes_price_range() {
        let query = ApartmentSearchQuery {
            capacity: Some(4),
            price_min: Some(50.0),
            price_max: Some(120.0),
            page: 2,
            ..Default::default()
        };
        let params = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(
            params,
            "capacity=4&price_min=50&price_max=120&page=2&per_page=12"
        );
    }
}
