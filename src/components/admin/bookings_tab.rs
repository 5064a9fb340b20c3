// ============================================================================
// BOOKINGS TAB - Gestión de reservas de toda la plataforma
// ============================================================================

use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::models::{Booking, BookingState};
use crate::services::booking_service;

#[function_component(BookingsTab)]
pub fn bookings_tab() -> Html {
    let bookings = use_state(|| None::<Vec<Booking>>);
    let failed = use_state(|| false);
    let toasts = use_toast();

    {
        let bookings = bookings.clone();
        let failed = failed.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match booking_service::list_all_bookings().await {
                    Ok(loaded) => bookings.set(Some(loaded)),
                    Err(e) => {
                        log::error!("❌ Error cargando reservas de la plataforma: {}", e);
                        toasts.error("No se pudieron cargar las reservas");
                        failed.set(true);
                    }
                }
            });
            || ()
        });
    }

    let on_transition = {
        let bookings = bookings.clone();
        let toasts = toasts.clone();
        Callback::from(move |(id, state): (String, BookingState)| {
            let bookings = bookings.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match booking_service::update_booking_state(&id, state).await {
                    Ok(updated) => {
                        let list = (*bookings).clone().map(|list| {
                            list.into_iter()
                                .map(|b| if b.id == updated.id { updated.clone() } else { b })
                                .collect::<Vec<_>>()
                        });
                        bookings.set(list);
                        toasts.success(&format!("Reserva {}", updated.state.label().to_lowercase()));
                    }
                    Err(e) => toasts.error(&format!("No se pudo actualizar la reserva: {}", e)),
                }
            });
        })
    };

    if *failed {
        return html! {
            <div class="empty-state">{ "Reservas no disponibles" }</div>
        };
    }

    let Some(list) = (*bookings).clone() else {
        return html! { <div class="loading">{ "Cargando reservas..." }</div> };
    };

    if list.is_empty() {
        return html! {
            <div class="empty-state">{ "No hay reservas en la plataforma" }</div>
        };
    }

    html! {
        <div class="bookings-tab">
            <table class="bookings-table">
                <thead>
                    <tr>
                        <th>{ "Apartamento" }</th>
                        <th>{ "Cliente" }</th>
                        <th>{ "Fechas" }</th>
                        <th>{ "Huéspedes" }</th>
                        <th>{ "Total" }</th>
                        <th>{ "Estado" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for list.iter().map(|booking| {
                        let transition = |state: BookingState, label: &'static str, class: &'static str| {
                            let on_transition = on_transition.clone();
                            let id = booking.id.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                on_transition.emit((id.clone(), state));
                            });
                            html! {
                                <button class={classes!("btn-link", class)} onclick={onclick}>
                                    { label }
                                </button>
                            }
                        };
                        let actions = match booking.state {
                            BookingState::Pending => html! {
                                <>
                                    { transition(BookingState::Confirmed, "Confirmar", "btn-confirm") }
                                    { transition(BookingState::Declined, "Rechazar", "btn-danger") }
                                </>
                            },
                            BookingState::Confirmed => {
                                transition(BookingState::Completed, "Completar", "btn-confirm")
                            }
                            _ => html! {},
                        };
                        html! {
                            <tr key={booking.id.clone()}>
                                <td>{ booking.apartment_name.clone().unwrap_or_else(|| booking.apartment_id.clone()) }</td>
                                <td>{ &booking.user_id }</td>
                                <td>{ format!("{} a {}", booking.check_in, booking.check_out) }</td>
                                <td>{ booking.guests }</td>
                                <td>{ format!("{:.2} EUR", booking.total_cost) }</td>
                                <td>
                                    <span class={classes!("state-chip", booking.state.css_class())}>
                                        { booking.state.label() }
                                    </span>
                                </td>
                                <td class="row-actions">{ actions }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
