use serde::{Deserialize, Serialize};

use crate::models::booking::BookingState;

/// Estadísticas del dashboard admin (GET /bookings/stats)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingStats {
    pub total_bookings: u32,
    pub active_bookings: u32,
    pub total_revenue: f64,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub by_state: Vec<StateCount>,
    #[serde(default)]
    pub monthly: Vec<MonthlyPoint>,
    #[serde(default)]
    pub top_apartments: Vec<TopApartment>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StateCount {
    pub state: BookingState,
    pub count: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MonthlyPoint {
    /// "2026-08"
    pub month: String,
    pub bookings: u32,
    pub revenue: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TopApartment {
    pub apartment_id: String,
    pub name: String,
    pub bookings: u32,
}

/// Ancho (en %) de una barra de los gráficos CSS del dashboard
pub fn bar_width_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    ((value / max) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_proportional() {
        assert_eq!(bar_width_percent(5.0, 10.0), 50.0);
        assert_eq!(bar_width_percent(10.0, 10.0), 100.0);
    }

    #[test]
    fn bar_width_handles_degenerate_max() {
        assert_eq!(bar_width_percent(5.0, 0.0), 0.0);
        assert_eq!(bar_width_percent(5.0, -1.0), 0.0);
    }

    #[test]
    fn bar_width_clamps_overflow() {
        assert_eq!(bar_width_percent(20.0, 10.0), 100.0);
    }
}
