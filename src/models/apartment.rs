use serde::{Deserialize, Serialize};

/// Apartamento tal y como lo entrega el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Apartment {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Precio por noche (EUR)
    pub price_per_night: f64,
    /// Capacidad máxima de huéspedes
    pub capacity: u32,
    /// Conjunto de servicios ("wifi", "parking", ...)
    #[serde(default)]
    pub services: Vec<String>,
    /// URLs de imágenes
    #[serde(default)]
    pub images: Vec<String>,
}

impl Apartment {
    /// Primera imagen o placeholder para las cards del listado
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or("/img/apartment-placeholder.jpg")
    }
}

/// Parámetros de búsqueda del listado (GET /apartments/search)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApartmentSearchQuery {
    pub q: Option<String>,
    pub capacity: Option<u32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ApartmentSearchQuery {
    fn default() -> Self {
        Self {
            q: None,
            capacity: None,
            price_min: None,
            price_max: None,
            page: 1,
            per_page: crate::utils::constants::DEFAULT_PER_PAGE,
        }
    }
}

/// Página de resultados de búsqueda
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApartmentPage {
    pub apartments: Vec<Apartment>,
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

impl ApartmentPage {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = ApartmentPage {
            apartments: Vec::new(),
            total: 25,
            page: 1,
            per_page: 12,
        };
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn total_pages_zero_per_page_is_zero() {
        let page = ApartmentPage {
            apartments: Vec::new(),
            total: 25,
            page: 1,
            per_page: 0,
        };
        assert_eq!(page.total_pages(), 0);
    }
}
