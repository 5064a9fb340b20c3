// ============================================================================
// CALENDAR - Selección de rango de fechas para la reserva
// ============================================================================
// La cuadrícula es pura (42 celdas, semanas de lunes a domingo) y el
// componente solo añade navegación de mes y resaltado de la selección.
// ============================================================================

use chrono::{Datelike, Duration, NaiveDate};
use yew::prelude::*;

/// Celda de la cuadrícula mensual
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Pertenece al mes mostrado (las de relleno se pintan apagadas)
    pub in_month: bool,
    /// Anterior a hoy, no se puede reservar
    pub is_past: bool,
    pub is_today: bool,
}

/// Primer día del mes de `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Primer día del mes siguiente
pub fn next_month(date: NaiveDate) -> NaiveDate {
    month_start(month_start(date) + Duration::days(32))
}

/// Primer día del mes anterior
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    month_start(month_start(date) - Duration::days(1))
}

/// Cuadrícula de 6 semanas empezando en lunes para el mes de `first_of_month`
pub fn month_grid(first_of_month: NaiveDate, today: NaiveDate) -> Vec<CalendarCell> {
    let first = month_start(first_of_month);
    let offset = i64::from(first.weekday().num_days_from_monday());
    let grid_start = first - Duration::days(offset);

    (0..42)
        .map(|i| {
            let date = grid_start + Duration::days(i);
            CalendarCell {
                date,
                in_month: date.month() == first.month() && date.year() == first.year(),
                is_past: date < today,
                is_today: date == today,
            }
        })
        .collect()
}

/// Noches entre entrada y salida (la noche de salida no cuenta)
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Precio de la estancia sin reglas aplicadas
pub fn stay_price(nights: i64, price_per_night: f64) -> f64 {
    nights as f64 * price_per_night
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Enero",
        2 => "Febrero",
        3 => "Marzo",
        4 => "Abril",
        5 => "Mayo",
        6 => "Junio",
        7 => "Julio",
        8 => "Agosto",
        9 => "Septiembre",
        10 => "Octubre",
        11 => "Noviembre",
        _ => "Diciembre",
    }
}

/// Estado de la selección: primero la entrada, después la salida.
/// Un click sobre una fecha igual o anterior a la entrada reinicia el rango.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum DateRangeSelection {
    #[default]
    Empty,
    CheckInPicked(NaiveDate),
    Complete {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

impl DateRangeSelection {
    pub fn click(&self, date: NaiveDate) -> Self {
        match self {
            DateRangeSelection::Empty | DateRangeSelection::Complete { .. } => {
                DateRangeSelection::CheckInPicked(date)
            }
            DateRangeSelection::CheckInPicked(check_in) => {
                if date <= *check_in {
                    DateRangeSelection::CheckInPicked(date)
                } else {
                    DateRangeSelection::Complete {
                        check_in: *check_in,
                        check_out: date,
                    }
                }
            }
        }
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        match self {
            DateRangeSelection::Empty => None,
            DateRangeSelection::CheckInPicked(date) => Some(*date),
            DateRangeSelection::Complete { check_in, .. } => Some(*check_in),
        }
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        match self {
            DateRangeSelection::Complete { check_out, .. } => Some(*check_out),
            _ => None,
        }
    }

    /// La fecha cae dentro del rango resaltado (ambos extremos incluidos)
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            DateRangeSelection::Empty => false,
            DateRangeSelection::CheckInPicked(check_in) => date == *check_in,
            DateRangeSelection::Complete {
                check_in,
                check_out,
            } => *check_in <= date && date <= *check_out,
        }
    }

    pub fn nights(&self) -> Option<i64> {
        match self {
            DateRangeSelection::Complete {
                check_in,
                check_out,
            } => Some((*check_out - *check_in).num_days()),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DateRangeSelection::Complete { .. })
    }
}

/// Fecha local del navegador
fn today_local() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub selection: DateRangeSelection,
    pub on_select: Callback<DateRangeSelection>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let today = today_local();
    let view_month = use_state(|| month_start(today));

    let on_prev = {
        let view_month = view_month.clone();
        Callback::from(move |_| view_month.set(prev_month(*view_month)))
    };
    let on_next = {
        let view_month = view_month.clone();
        Callback::from(move |_| view_month.set(next_month(*view_month)))
    };

    // No tiene sentido navegar a meses completamente pasados
    let prev_disabled = *view_month <= month_start(today);

    let cells = month_grid(*view_month, today);

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="calendar-nav" onclick={on_prev} disabled={prev_disabled}>
                    { "‹" }
                </button>
                <span class="calendar-month">
                    { format!("{} {}", month_name(view_month.month()), view_month.year()) }
                </span>
                <button class="calendar-nav" onclick={on_next}>{ "›" }</button>
            </div>
            <div class="calendar-weekdays">
                { for ["L", "M", "X", "J", "V", "S", "D"].iter().map(|d| html! {
                    <span class="calendar-weekday">{ d }</span>
                }) }
            </div>
            <div class="calendar-grid">
                { for cells.iter().map(|cell| {
                    let selected = props.selection.contains(cell.date);
                    let is_check_in = props.selection.check_in() == Some(cell.date);
                    let is_check_out = props.selection.check_out() == Some(cell.date);

                    let onclick = {
                        let on_select = props.on_select.clone();
                        let selection = props.selection;
                        let date = cell.date;
                        let disabled = cell.is_past;
                        Callback::from(move |_| {
                            if !disabled {
                                on_select.emit(selection.click(date));
                            }
                        })
                    };

                    html! {
                        <button
                            key={cell.date.to_string()}
                            class={classes!(
                                "calendar-cell",
                                (!cell.in_month).then_some("outside"),
                                cell.is_past.then_some("past"),
                                cell.is_today.then_some("today"),
                                selected.then_some("selected"),
                                is_check_in.then_some("check-in"),
                                is_check_out.then_some("check-out"),
                            )}
                            disabled={cell.is_past}
                            {onclick}
                        >
                            { cell.date.day() }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_start_clamps_to_first_day() {
        assert_eq!(month_start(date(2026, 9, 17)), date(2026, 9, 1));
        assert_eq!(month_start(date(2026, 9, 1)), date(2026, 9, 1));
    }

    #[test]
    fn month_navigation_crosses_year_boundary() {
        assert_eq!(next_month(date(2026, 12, 15)), date(2027, 1, 1));
        assert_eq!(prev_month(date(2027, 1, 5)), date(2026, 12, 1));
    }

    #[test]
    fn next_month_handles_leap_february() {
        assert_eq!(next_month(date(2028, 2, 1)), date(2028, 3, 1));
        assert_eq!(prev_month(date(2028, 3, 10)), date(2028, 2, 1));
    }

    #[test]
    fn grid_has_42_cells_starting_monday() {
        let today = date(2026, 9, 10);
        let grid = month_grid(date(2026, 9, 1), today);

        assert_eq!(grid.len(), 42);
        // Septiembre de 2026 empieza en martes: la cuadrícula abre el lunes 31
        assert_eq!(grid[0].date, date(2026, 8, 31));
        assert!(!grid[0].in_month);
        assert_eq!(grid[1].date, date(2026, 9, 1));
        assert!(grid[1].in_month);
    }

    #[test]
    fn grid_marks_past_and_today() {
        let today = date(2026, 9, 10);
        let grid = month_grid(date(2026, 9, 1), today);

        let today_cell = grid.iter().find(|c| c.date == today).unwrap();
        assert!(today_cell.is_today);
        assert!(!today_cell.is_past);

        let yesterday = grid.iter().find(|c| c.date == date(2026, 9, 9)).unwrap();
        assert!(yesterday.is_past);
    }

    #[test]
    fn grid_when_month_starts_on_monday() {
        // Febrero de 2027 empieza en lunes: sin celdas de relleno al inicio
        let grid = month_grid(date(2027, 2, 1), date(2027, 2, 1));
        assert_eq!(grid[0].date, date(2027, 2, 1));
        assert!(grid[0].in_month);
        assert_eq!(grid[41].date, date(2027, 3, 14));
        assert!(!grid[41].in_month);
    }

    #[test]
    fn selection_picks_check_in_then_check_out() {
        let selection = DateRangeSelection::Empty
            .click(date(2026, 9, 3))
            .click(date(2026, 9, 7));

        assert_eq!(
            selection,
            DateRangeSelection::Complete {
                check_in: date(2026, 9, 3),
                check_out: date(2026, 9, 7),
            }
        );
        assert_eq!(selection.nights(), Some(4));
    }

    #[test]
    fn clicking_on_or_before_check_in_restarts_range() {
        let picked = DateRangeSelection::Empty.click(date(2026, 9, 5));

        assert_eq!(
            picked.click(date(2026, 9, 5)),
            DateRangeSelection::CheckInPicked(date(2026, 9, 5))
        );
        assert_eq!(
            picked.click(date(2026, 9, 2)),
            DateRangeSelection::CheckInPicked(date(2026, 9, 2))
        );
    }

    #[test]
    fn clicking_after_complete_starts_new_range() {
        let complete = DateRangeSelection::Empty
            .click(date(2026, 9, 3))
            .click(date(2026, 9, 7));

        assert_eq!(
            complete.click(date(2026, 9, 20)),
            DateRangeSelection::CheckInPicked(date(2026, 9, 20))
        );
    }

    #[test]
    fn nights_and_price_preview() {
        let nights = nights_between(date(2026, 9, 3), date(2026, 9, 7));
        assert_eq!(nights, 4);
        assert_eq!(stay_price(nights, 85.5), 342.0);
    }

    #[test]
    fn contains_includes_both_endpoints() {
        let selection = DateRangeSelection::Complete {
            check_in: date(2026, 9, 3),
            check_out: date(2026, 9, 7),
        };

        assert!(selection.contains(date(2026, 9, 3)));
        assert!(selection.contains(date(2026, 9, 5)));
        assert!(selection.contains(date(2026, 9, 7)));
        assert!(!selection.contains(date(2026, 9, 8)));
    }
}
