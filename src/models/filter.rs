use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// PRICE FILTER - Regla de precio (recargo o descuento) aplicada por fecha
// ============================================================================
// El backend es el dueño del CRUD; el cliente solo evalúa la aplicabilidad
// por noche para pintar el desglose de la confirmación de reserva.
// ============================================================================

/// Modo de aplicabilidad por fecha de una regla de precio
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Aplica todas las noches
    Always,
    /// Aplica las noches cuyo día de semana esté en `week_days`
    WeekDays,
    /// Aplica las noches dentro de [start_date, end_date]
    DateRange,
    /// Aplica a toda la estancia cuando alcanza `min_nights` noches
    MinNights,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PriceFilter {
    pub id: String,
    pub name: String,
    /// Flag de activación: las reglas inactivas nunca aplican
    pub active: bool,
    /// true = descuento, false = recargo
    pub is_discount: bool,
    /// Porcentaje sobre el precio por noche
    pub value: f64,
    pub mode: FilterMode,
    /// Días de semana 0=Lun..6=Dom (modo WeekDays)
    #[serde(default)]
    pub week_days: Option<Vec<u8>>,
    /// Límites del modo DateRange; un límite ausente queda abierto
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Condición de estancia mínima (modo MinNights)
    #[serde(default)]
    pub min_nights: Option<u32>,
}

impl PriceFilter {
    /// ¿Aplica esta regla a la noche `date` de una estancia de `stay_nights`?
    pub fn applies_on(&self, date: NaiveDate, stay_nights: i64) -> bool {
        if !self.active {
            return false;
        }
        match self.mode {
            FilterMode::Always => true,
            FilterMode::WeekDays => {
                let day = date.weekday().num_days_from_monday() as u8;
                self.week_days
                    .as_ref()
                    .map(|days| days.contains(&day))
                    .unwrap_or(false)
            }
            FilterMode::DateRange => {
                let after_start = self.start_date.map(|s| date >= s).unwrap_or(true);
                let before_end = self.end_date.map(|e| date <= e).unwrap_or(true);
                after_start && before_end
            }
            FilterMode::MinNights => self
                .min_nights
                .map(|min| stay_nights >= i64::from(min))
                .unwrap_or(false),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_discount {
            "Descuento"
        } else {
            "Recargo"
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            FilterMode::Always => "Siempre",
            FilterMode::WeekDays => "Días de semana",
            FilterMode::DateRange => "Rango de fechas",
            FilterMode::MinNights => "Estancia mínima",
        }
    }
}

/// Payload de creación (POST /filters)
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct CreateFilterRequest {
    pub name: String,
    pub active: bool,
    pub is_discount: bool,
    pub value: f64,
    pub mode: FilterMode,
    pub week_days: Option<Vec<u8>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_nights: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_filter(mode: FilterMode) -> PriceFilter {
        PriceFilter {
            id: "f-1".to_string(),
            name: "Test".to_string(),
            active: true,
            is_discount: false,
            value: 10.0,
            mode,
            week_days: None,
            start_date: None,
            end_date: None,
            min_nights: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inactive_filter_never_applies() {
        let mut filter = base_filter(FilterMode::Always);
        filter.active = false;
        assert!(!filter.applies_on(date(2026, 8, 22), 3));
    }

    #[test]
    fn always_applies_every_night() {
        let filter = base_filter(FilterMode::Always);
        assert!(filter.applies_on(date(2026, 8, 22), 1));
        assert!(filter.applies_on(date(2026, 12, 31), 30));
    }

    #[test]
    fn week_days_matches_monday_zero_convention() {
        let mut filter = base_filter(FilterMode::WeekDays);
        // sábado=5, domingo=6
        filter.week_days = Some(vec![5, 6]);
        // 2026-08-22 es sábado
        assert!(filter.applies_on(date(2026, 8, 22), 2));
        assert!(filter.applies_on(date(2026, 8, 23), 2));
        // lunes no
        assert!(!filter.applies_on(date(2026, 8, 24), 2));
    }

    #[test]
    fn week_days_without_days_never_applies() {
        let filter = base_filter(FilterMode::WeekDays);
        assert!(!filter.applies_on(date(2026, 8, 22), 2));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let mut filter = base_filter(FilterMode::DateRange);
        filter.start_date = Some(date(2026, 8, 10));
        filter.end_date = Some(date(2026, 8, 20));
        assert!(!filter.applies_on(date(2026, 8, 9), 2));
        assert!(filter.applies_on(date(2026, 8, 10), 2));
        assert!(filter.applies_on(date(2026, 8, 20), 2));
        assert!(!filter.applies_on(date(2026, 8, 21), 2));
    }

    #[test]
    fn date_range_missing_bound_is_open() {
        let mut filter = base_filter(FilterMode::DateRange);
        filter.end_date = Some(date(2026, 8, 20));
        assert!(filter.applies_on(date(2000, 1, 1), 2));
        assert!(!filter.applies_on(date(2026, 8, 21), 2));
    }

    #[test]
    fn min_nights_depends_on_stay_length() {
        let mut filter = base_filter(FilterMode::MinNights);
        filter.min_nights = Some(7);
        assert!(!filter.applies_on(date(2026, 8, 22), 6));
        assert!(filter.applies_on(date(2026, 8, 22), 7));
        assert!(filter.applies_on(date(2026, 8, 22), 10));
    }

    #[test]
    fn mode_deserializes_snake_case() {
        let mode: FilterMode = serde_json::from_str("\"week_days\"").unwrap();
        assert_eq!(mode, FilterMode::WeekDays);
        let mode: FilterMode = serde_json::from_str("\"min_nights\"").unwrap();
        assert_eq!(mode, FilterMode::MinNights);
    }
}
