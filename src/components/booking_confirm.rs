// ============================================================================
// BOOKING CONFIRM - Desglose de precio y confirmación de la reserva
// ============================================================================
// Recibe fechas y huéspedes por query, carga apartamento y reglas activas,
// y recalcula el desglose con la agregación pura de pricing.rs.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::calendar::nights_between;
use crate::components::toast::use_toast;
use crate::models::{Apartment, CreateBookingRequest, PriceFilter};
use crate::pricing::{aggregate_filters, filters_by_night, price_breakdown};
use crate::routes::{redirect_to_error, BookingQuery, ErrorQuery, Route};
use crate::services::{apartment_service, booking_service, filter_service};

#[derive(Properties, PartialEq)]
pub struct BookingConfirmProps {
    pub id: String,
}

#[function_component(BookingConfirm)]
pub fn booking_confirm(props: &BookingConfirmProps) -> Html {
    let navigator = use_navigator().expect("BookingConfirm fuera del router");
    let location = use_location().expect("BookingConfirm sin location");
    let toasts = use_toast();

    let booking_query = location
        .query::<BookingQuery>()
        .ok()
        .filter(|q| q.from < q.to && q.guests >= 1);

    // Sin fechas válidas no hay nada que confirmar
    {
        let navigator = navigator.clone();
        use_effect_with(booking_query.is_none(), move |invalid| {
            if *invalid {
                let query = ErrorQuery {
                    message: "La reserva no lleva fechas válidas".to_string(),
                    code: 0,
                };
                if navigator
                    .push_with_query(&Route::ErrorPage, &query)
                    .is_err()
                {
                    navigator.push(&Route::ErrorPage);
                }
            }
            || ()
        });
    }

    let apartment = use_state(|| None::<Apartment>);
    let filters = use_state(|| None::<Vec<PriceFilter>>);
    let submitting = use_state(|| false);

    {
        let apartment = apartment.clone();
        let filters = filters.clone();
        let navigator = navigator.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match apartment_service::get_apartment(&id).await {
                    Ok(found) => apartment.set(Some(found)),
                    Err(e) => {
                        redirect_to_error(&navigator, &e);
                        return;
                    }
                }
                match filter_service::list_active_filters().await {
                    Ok(active) => filters.set(Some(active)),
                    Err(e) => redirect_to_error(&navigator, &e),
                }
            });
            || ()
        });
    }

    let (Some(query), Some(apartment), Some(filters)) = (
        booking_query,
        (*apartment).clone(),
        (*filters).clone(),
    ) else {
        return html! { <div class="loading">{ "Preparando la reserva..." }</div> };
    };

    let nights = nights_between(query.from, query.to);
    let by_night = filters_by_night(&filters, query.from, query.to);
    let impacts = aggregate_filters(apartment.price_per_night, &by_night);
    let breakdown = price_breakdown(apartment.price_per_night, nights, &impacts);

    let on_confirm = {
        let navigator = navigator.clone();
        let toasts = toasts.clone();
        let submitting = submitting.clone();
        let request = CreateBookingRequest {
            apartment_id: apartment.id.clone(),
            check_in: query.from,
            check_out: query.to,
            guests: query.guests,
        };

        Callback::from(move |_| {
            if *submitting {
                return;
            }
            submitting.set(true);

            let navigator = navigator.clone();
            let toasts = toasts.clone();
            let submitting = submitting.clone();
            let request = request.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match booking_service::create_booking(&request).await {
                    Ok(booking) => {
                        toasts.success(&format!(
                            "Reserva confirmada: {:.2} EUR",
                            booking.total_cost
                        ));
                        navigator.push(&Route::MyBookings);
                    }
                    Err(e) => {
                        log::error!("❌ Error creando la reserva: {}", e);
                        toasts.error(&format!("No se pudo crear la reserva: {}", e));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="booking-confirm">
            <h1>{ "Confirmar reserva" }</h1>

            <div class="booking-summary">
                <h2>{ &apartment.name }</h2>
                <p class="booking-dates">
                    { format!("Del {} al {} · {} noches · {} huéspedes",
                        query.from, query.to, nights, query.guests) }
                </p>
            </div>

            <table class="price-table">
                <tbody>
                    <tr class="price-base">
                        <td>{ format!("{} noches × {:.2} EUR", nights, apartment.price_per_night) }</td>
                        <td class="amount">{ format!("{:.2} EUR", breakdown.base) }</td>
                    </tr>
                    { for impacts.iter().map(|impact| {
                        let sign = if impact.is_discount { "−" } else { "+" };
                        html! {
                            <tr
                                key={impact.filter_id.clone()}
                                class={if impact.is_discount { "price-discount" } else { "price-increment" }}
                            >
                                <td>
                                    { format!(
                                        "{} ({}% · {} noches)",
                                        impact.name, impact.value, impact.nights_applied,
                                    ) }
                                </td>
                                <td class="amount">
                                    { format!("{}{:.2} EUR", sign, impact.impact.abs()) }
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
                <tfoot>
                    if breakdown.increments > 0.0 {
                        <tr>
                            <td>{ "Total recargos" }</td>
                            <td class="amount">{ format!("+{:.2} EUR", breakdown.increments) }</td>
                        </tr>
                    }
                    if breakdown.discounts > 0.0 {
                        <tr>
                            <td>{ "Total descuentos" }</td>
                            <td class="amount">{ format!("−{:.2} EUR", breakdown.discounts) }</td>
                        </tr>
                    }
                    <tr class="price-total">
                        <td>{ "Total" }</td>
                        <td class="amount">{ format!("{:.2} EUR", breakdown.total) }</td>
                    </tr>
                </tfoot>
            </table>

            <button class="btn-confirm" disabled={*submitting} onclick={on_confirm}>
                { if *submitting { "Enviando..." } else { "Confirmar reserva" } }
            </button>
        </div>
    }
}
