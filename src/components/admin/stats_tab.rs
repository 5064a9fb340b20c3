// ============================================================================
// STATS TAB - Estadísticas de la plataforma con gráficos CSS
// ============================================================================
// Las barras son divs con width en %, no hay librería de gráficos.
// ============================================================================

use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::models::{bar_width_percent, BookingStats};
use crate::services::booking_service;

fn bar_row(label: String, display: String, width: f64, bar_class: &'static str) -> Html {
    html! {
        <div class="chart-row" key={label.clone()}>
            <span class="chart-label">{ label }</span>
            <div class="chart-track">
                <div
                    class={classes!("chart-bar", bar_class)}
                    style={format!("width: {:.1}%", width)}
                />
            </div>
            <span class="chart-value">{ display }</span>
        </div>
    }
}

#[function_component(StatsTab)]
pub fn stats_tab() -> Html {
    let stats = use_state(|| None::<BookingStats>);
    let failed = use_state(|| false);
    let toasts = use_toast();

    {
        let stats = stats.clone();
        let failed = failed.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match booking_service::fetch_booking_stats().await {
                    Ok(loaded) => stats.set(Some(loaded)),
                    Err(e) => {
                        log::error!("❌ Error cargando estadísticas: {}", e);
                        toasts.error("No se pudieron cargar las estadísticas");
                        failed.set(true);
                    }
                }
            });
            || ()
        });
    }

    if *failed {
        return html! {
            <div class="empty-state">{ "Estadísticas no disponibles" }</div>
        };
    }

    let Some(stats) = (*stats).clone() else {
        return html! { <div class="loading">{ "Cargando estadísticas..." }</div> };
    };

    let max_bookings = stats
        .monthly
        .iter()
        .map(|p| p.bookings)
        .max()
        .unwrap_or(0) as f64;
    let max_revenue = stats
        .monthly
        .iter()
        .map(|p| p.revenue)
        .fold(0.0f64, f64::max);
    let max_state = stats.by_state.iter().map(|s| s.count).max().unwrap_or(0) as f64;
    let max_top = stats
        .top_apartments
        .iter()
        .map(|t| t.bookings)
        .max()
        .unwrap_or(0) as f64;

    let average = stats
        .average_rating
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "—".to_string());

    html! {
        <div class="stats-tab">
            <div class="stat-cards">
                <div class="stat-card">
                    <div class="stat-value">{ format!("📦 {}", stats.total_bookings) }</div>
                    <div class="stat-label">{ "Reservas totales" }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{ format!("🟢 {}", stats.active_bookings) }</div>
                    <div class="stat-label">{ "Reservas activas" }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{ format!("💶 {:.2}", stats.total_revenue) }</div>
                    <div class="stat-label">{ "Ingresos (EUR)" }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{ format!("⭐ {}", average) }</div>
                    <div class="stat-label">{ "Nota media" }</div>
                </div>
            </div>

            <section class="chart">
                <h3>{ "Reservas por mes" }</h3>
                { for stats.monthly.iter().map(|point| bar_row(
                    point.month.clone(),
                    point.bookings.to_string(),
                    bar_width_percent(f64::from(point.bookings), max_bookings),
                    "bar-bookings",
                )) }
            </section>

            <section class="chart">
                <h3>{ "Ingresos por mes" }</h3>
                { for stats.monthly.iter().map(|point| bar_row(
                    point.month.clone(),
                    format!("{:.2} EUR", point.revenue),
                    bar_width_percent(point.revenue, max_revenue),
                    "bar-revenue",
                )) }
            </section>

            <section class="chart">
                <h3>{ "Reservas por estado" }</h3>
                { for stats.by_state.iter().map(|entry| bar_row(
                    entry.state.label().to_string(),
                    entry.count.to_string(),
                    bar_width_percent(f64::from(entry.count), max_state),
                    entry.state.css_class(),
                )) }
            </section>

            if !stats.top_apartments.is_empty() {
                <section class="chart">
                    <h3>{ "Apartamentos más reservados" }</h3>
                    { for stats.top_apartments.iter().map(|top| bar_row(
                        top.name.clone(),
                        top.bookings.to_string(),
                        bar_width_percent(f64::from(top.bookings), max_top),
                        "bar-top",
                    )) }
                </section>
            }
        </div>
    }
}
