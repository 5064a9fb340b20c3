// ============================================================================
// ROUTES - Mapa de rutas de la SPA
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

use crate::services::ApiError;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/apartments/:id/book")]
    BookingConfirm { id: String },
    #[at("/apartments/:id")]
    ApartmentDetail { id: String },
    #[at("/bookings")]
    MyBookings,
    #[at("/profile")]
    Profile,
    #[at("/error")]
    ErrorPage,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Fechas y huéspedes elegidos, se llevan en la query hasta la confirmación
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub guests: u32,
}

/// Parámetros de la página de error
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorQuery {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: u16,
}

/// Navega a la página de error con el detalle del fallo en la query
pub fn redirect_to_error(navigator: &Navigator, error: &ApiError) {
    let (message, code) = error.redirect_params();
    log::error!("❌ Redirigiendo a /error: {} (código {})", message, code);
    let query = ErrorQuery { message, code };
    if navigator
        .push_with_query(&Route::ErrorPage, &query)
        .is_err()
    {
        navigator.push(&Route::ErrorPage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_query_uses_iso_dates() {
        let query = BookingQuery {
            from: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
            guests: 2,
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(encoded, "from=2026-09-01&to=2026-09-05&guests=2");

        let decoded: BookingQuery = serde_urlencoded::from_str(&encoded).unwrap();
        assert_eq!(decoded, query);
    }

    #[test]
    fn error_query_tolerates_missing_fields() {
        let decoded: ErrorQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(decoded, ErrorQuery::default());

        let decoded: ErrorQuery =
            serde_urlencoded::from_str("message=Apartamento+no+encontrado&code=404").unwrap();
        assert_eq!(decoded.message, "Apartamento no encontrado");
        assert_eq!(decoded.code, 404);
    }
}
