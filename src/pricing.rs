use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::PriceFilter;

// ============================================================================
// PRICING - Agregación de reglas de precio para la confirmación de reserva
// ============================================================================
// Aritmética pura sobre colecciones pequeñas: se recalcula en cada cambio de
// entrada, sin caché ni persistencia.
// ============================================================================

/// Impacto agregado de una regla sobre la estancia
#[derive(Clone, PartialEq, Debug)]
pub struct FilterImpact {
    pub filter_id: String,
    pub name: String,
    pub is_discount: bool,
    /// Porcentaje de la regla
    pub value: f64,
    /// Noches de la estancia en las que aplica
    pub nights_applied: u32,
    /// precio_noche × (value/100) × noches aplicadas, negativo si descuento
    pub impact: f64,
}

/// Desglose final del precio
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PriceBreakdown {
    pub base: f64,
    pub increments: f64,
    pub discounts: f64,
    pub total: f64,
}

/// Una fecha por noche de la estancia (el día de check-out no se duerme)
pub fn nights_of_stay(check_in: NaiveDate, check_out: NaiveDate) -> Vec<NaiveDate> {
    let mut nights = Vec::new();
    let mut day = check_in;
    while day < check_out {
        nights.push(day);
        day += Duration::days(1);
    }
    nights
}

/// Mapa fecha → reglas aplicables esa noche
pub fn filters_by_night<'a>(
    filters: &'a [PriceFilter],
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> BTreeMap<NaiveDate, Vec<&'a PriceFilter>> {
    let nights = nights_of_stay(check_in, check_out);
    let stay_nights = nights.len() as i64;

    nights
        .into_iter()
        .map(|date| {
            let applicable: Vec<&PriceFilter> = filters
                .iter()
                .filter(|f| f.applies_on(date, stay_nights))
                .collect();
            (date, applicable)
        })
        .collect()
}

/// Agrupa por id de regla, cuenta las noches en que aplica cada una y
/// calcula su impacto; el resultado queda ordenado por impacto descendente.
pub fn aggregate_filters(
    price_per_night: f64,
    by_night: &BTreeMap<NaiveDate, Vec<&PriceFilter>>,
) -> Vec<FilterImpact> {
    let mut impacts: Vec<FilterImpact> = Vec::new();

    for applicable in by_night.values() {
        for filter in applicable {
            match impacts.iter_mut().find(|i| i.filter_id == filter.id) {
                Some(entry) => entry.nights_applied += 1,
                None => impacts.push(FilterImpact {
                    filter_id: filter.id.clone(),
                    name: filter.name.clone(),
                    is_discount: filter.is_discount,
                    value: filter.value,
                    nights_applied: 1,
                    impact: 0.0,
                }),
            }
        }
    }

    for entry in &mut impacts {
        let magnitude =
            price_per_night * (entry.value / 100.0) * f64::from(entry.nights_applied);
        entry.impact = if entry.is_discount {
            -magnitude
        } else {
            magnitude
        };
    }

    // sort_by es estable: a igual impacto se conserva el orden de aparición
    impacts.sort_by(|a, b| b.impact.partial_cmp(&a.impact).unwrap_or(Ordering::Equal));
    impacts
}

/// Suma recargos y descuentos por separado: total = base + recargos − descuentos
pub fn price_breakdown(
    price_per_night: f64,
    nights: i64,
    impacts: &[FilterImpact],
) -> PriceBreakdown {
    let base = price_per_night * nights as f64;
    let increments: f64 = impacts
        .iter()
        .filter(|i| i.impact > 0.0)
        .map(|i| i.impact)
        .sum();
    let discounts: f64 = impacts
        .iter()
        .filter(|i| i.impact < 0.0)
        .map(|i| i.impact.abs())
        .sum();

    PriceBreakdown {
        base,
        increments,
        discounts,
        total: base + increments - discounts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterMode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filter(id: &str, mode: FilterMode, value: f64, is_discount: bool) -> PriceFilter {
        PriceFilter {
            id: id.to_string(),
            name: id.to_string(),
            active: true,
            is_discount,
            value,
            mode,
            week_days: None,
            start_date: None,
            end_date: None,
            min_nights: None,
        }
    }

    #[test]
    fn nights_exclude_checkout_day() {
        let nights = nights_of_stay(date(2026, 9, 1), date(2026, 9, 4));
        assert_eq!(
            nights,
            vec![date(2026, 9, 1), date(2026, 9, 2), date(2026, 9, 3)]
        );
    }

    #[test]
    fn empty_stay_has_no_nights() {
        assert!(nights_of_stay(date(2026, 9, 1), date(2026, 9, 1)).is_empty());
    }

    #[test]
    fn by_night_map_respects_weekday_mode() {
        let mut weekend = filter("weekend", FilterMode::WeekDays, 15.0, false);
        // sábado=5, domingo=6
        weekend.week_days = Some(vec![5, 6]);
        let filters = vec![weekend];

        // 2026-09-04 es viernes: estancia vie..lun = noches vie, sáb, dom
        let map = filters_by_night(&filters, date(2026, 9, 4), date(2026, 9, 7));
        assert_eq!(map.len(), 3);
        assert!(map[&date(2026, 9, 4)].is_empty());
        assert_eq!(map[&date(2026, 9, 5)].len(), 1);
        assert_eq!(map[&date(2026, 9, 6)].len(), 1);
    }

    #[test]
    fn by_night_map_ignores_inactive_filters() {
        let mut always = filter("always", FilterMode::Always, 10.0, false);
        always.active = false;
        let filters = vec![always];

        let map = filters_by_night(&filters, date(2026, 9, 1), date(2026, 9, 3));
        assert!(map.values().all(|v| v.is_empty()));
    }

    #[test]
    fn aggregation_counts_nights_per_filter() {
        let mut weekend = filter("weekend", FilterMode::WeekDays, 20.0, false);
        weekend.week_days = Some(vec![5, 6]);
        let always = filter("base-surcharge", FilterMode::Always, 10.0, false);
        let filters = vec![weekend, always];

        // vie 4 → lun 7: 3 noches, 2 de ellas en fin de semana
        let map = filters_by_night(&filters, date(2026, 9, 4), date(2026, 9, 7));
        let impacts = aggregate_filters(100.0, &map);

        assert_eq!(impacts.len(), 2);
        let weekend_impact = impacts.iter().find(|i| i.filter_id == "weekend").unwrap();
        assert_eq!(weekend_impact.nights_applied, 2);
        // 100 × 0.20 × 2
        assert_eq!(weekend_impact.impact, 40.0);
        let always_impact = impacts
            .iter()
            .find(|i| i.filter_id == "base-surcharge")
            .unwrap();
        assert_eq!(always_impact.nights_applied, 3);
        assert_eq!(always_impact.impact, 30.0);
    }

    #[test]
    fn discounts_have_negative_impact() {
        let long_stay = filter("long-stay", FilterMode::Always, 5.0, true);
        let filters = vec![long_stay];

        let map = filters_by_night(&filters, date(2026, 9, 1), date(2026, 9, 5));
        let impacts = aggregate_filters(80.0, &map);

        assert_eq!(impacts.len(), 1);
        // −(80 × 0.05 × 4)
        assert_eq!(impacts[0].impact, -16.0);
    }

    #[test]
    fn impacts_sorted_descending() {
        let big = filter("big", FilterMode::Always, 30.0, false);
        let small = filter("small", FilterMode::Always, 5.0, false);
        let discount = filter("discount", FilterMode::Always, 10.0, true);
        let filters = vec![discount, small, big];

        let map = filters_by_night(&filters, date(2026, 9, 1), date(2026, 9, 3));
        let impacts = aggregate_filters(100.0, &map);

        let ids: Vec<&str> = impacts.iter().map(|i| i.filter_id.as_str()).collect();
        assert_eq!(ids, vec!["big", "small", "discount"]);
    }

    #[test]
    fn breakdown_sums_increments_and_discounts_independently() {
        let surcharge = filter("surcharge", FilterMode::Always, 10.0, false);
        let discount = filter("discount", FilterMode::Always, 5.0, true);
        let filters = vec![surcharge, discount];

        let check_in = date(2026, 9, 1);
        let check_out = date(2026, 9, 5);
        let map = filters_by_night(&filters, check_in, check_out);
        let impacts = aggregate_filters(100.0, &map);
        let breakdown = price_breakdown(100.0, 4, &impacts);

        assert_eq!(breakdown.base, 400.0);
        assert_eq!(breakdown.increments, 40.0);
        assert_eq!(breakdown.discounts, 20.0);
        assert_eq!(
            breakdown.total,
            breakdown.base + breakdown.increments - breakdown.discounts
        );
        assert_eq!(breakdown.total, 420.0);
    }

    #[test]
    fn min_nights_filter_applies_to_whole_stay_or_nothing() {
        let mut weekly = filter("weekly", FilterMode::MinNights, 8.0, true);
        weekly.min_nights = Some(7);
        let filters = vec![weekly];

        let short = filters_by_night(&filters, date(2026, 9, 1), date(2026, 9, 4));
        assert!(short.values().all(|v| v.is_empty()));

        let long = filters_by_night(&filters, date(2026, 9, 1), date(2026, 9, 8));
        assert!(long.values().all(|v| v.len() == 1));
        let impacts = aggregate_filters(100.0, &long);
        assert_eq!(impacts[0].nights_applied, 7);
    }
}
