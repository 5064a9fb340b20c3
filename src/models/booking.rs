use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reserva tal y como la entrega el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub apartment_id: String,
    /// Nombre del apartamento, denormalizado para las listas
    #[serde(default)]
    pub apartment_name: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub state: BookingState,
    pub total_cost: f64,
    pub created_at: String,
}

/// Estados del ciclo de vida de una reserva (propiedad del servidor;
/// el cliente solo los muestra y pide transiciones)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum BookingState {
    Pending,
    Confirmed,
    Declined,
    Cancelled,
    Completed,
}

impl BookingState {
    /// Una reserva activa todavía puede cancelarse
    pub fn is_active(&self) -> bool {
        matches!(self, BookingState::Pending | BookingState::Confirmed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingState::Pending => "Pendiente",
            BookingState::Confirmed => "Confirmada",
            BookingState::Declined => "Rechazada",
            BookingState::Cancelled => "Cancelada",
            BookingState::Completed => "Completada",
        }
    }

    /// Clase CSS del chip de estado
    pub fn css_class(&self) -> &'static str {
        match self {
            BookingState::Pending => "state-pending",
            BookingState::Confirmed => "state-confirmed",
            BookingState::Declined => "state-declined",
            BookingState::Cancelled => "state-cancelled",
            BookingState::Completed => "state-completed",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct CreateBookingRequest {
    pub apartment_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct UpdateBookingStateRequest {
    pub state: BookingState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_serializes_lowercase() {
        let json = serde_json::to_string(&BookingState::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let back: BookingState = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, BookingState::Cancelled);
    }

    #[test]
    fn only_pending_and_confirmed_are_active() {
        assert!(BookingState::Pending.is_active());
        assert!(BookingState::Confirmed.is_active());
        assert!(!BookingState::Declined.is_active());
        assert!(!BookingState::Cancelled.is_active());
        assert!(!BookingState::Completed.is_active());
    }

    #[test]
    fn booking_deserializes_from_backend_shape() {
        let json = r#"{
            "id": "bk-1",
            "user_id": "u-1",
            "apartment_id": "ap-1",
            "check_in": "2026-09-01",
            "check_out": "2026-09-05",
            "guests": 2,
            "state": "pending",
            "total_cost": 320.0,
            "created_at": "2026-08-20T10:00:00Z"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.state, BookingState::Pending);
        assert_eq!(booking.apartment_name, None);
        assert_eq!(
            booking.check_in,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
    }
}
