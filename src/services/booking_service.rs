// ============================================================================
// BOOKING SERVICE - Reservas del usuario y administración
// ============================================================================

use crate::models::{
    Booking, BookingState, BookingStats, CreateBookingRequest, UpdateBookingStateRequest,
};
use crate::services::http::{self, ApiError};

/// Reservas del usuario autenticado
pub async fn my_bookings() -> Result<Vec<Booking>, ApiError> {
    let bookings: Vec<Booking> = http::get_json("/bookings").await?;
    log::info!("📦 {} reservas cargadas", bookings.len());
    Ok(bookings)
}

/// Crea una reserva con las fechas y huéspedes elegidos
pub async fn create_booking(request: &CreateBookingRequest) -> Result<Booking, ApiError> {
    log::info!(
        "📅 Creando reserva: apartamento {} del {} al {} ({} huéspedes)",
        request.apartment_id,
        request.check_in,
        request.check_out,
        request.guests
    );

    let booking: Booking = http::post_json("/bookings", request).await?;

    log::info!("✅ Reserva creada: {} (total {:.2} EUR)", booking.id, booking.total_cost);
    Ok(booking)
}

/// Transición de estado (cancelar, confirmar, rechazar, completar)
pub async fn update_booking_state(id: &str, state: BookingState) -> Result<Booking, ApiError> {
    log::info!("🔄 Reserva {} → {}", id, state.label());
    let request = UpdateBookingStateRequest { state };
    http::put_json(&format!("/bookings/{}/state", id), &request).await
}

/// Elimina una reserva ya terminada del historial
pub async fn delete_booking(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/bookings/{}", id)).await?;
    log::info!("🗑️ Reserva {} eliminada", id);
    Ok(())
}

/// Todas las reservas de la plataforma (solo admin)
pub async fn list_all_bookings() -> Result<Vec<Booking>, ApiError> {
    http::get_json("/bookings/all").await
}

/// Estadísticas agregadas para el panel de administración
pub async fn fetch_booking_stats() -> Result<BookingStats, ApiError> {
    let stats: BookingStats = http::get_json("/bookings/stats").await?;
    log::info!(
        "📊 Estadísticas: {} reservas, {:.2} EUR de ingresos",
        stats.total_bookings,
        stats.total_revenue
    );
    Ok(stats)
}
