// ============================================================================
// MY BOOKINGS - Reservas del usuario
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::use_toast;
use crate::hooks::use_session;
use crate::models::{Booking, BookingState};
use crate::routes::{redirect_to_error, Route};
use crate::services::booking_service;
use crate::session::SessionStatus;

#[function_component(MyBookings)]
pub fn my_bookings() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("MyBookings fuera del router");
    let toasts = use_toast();
    let bookings = use_state(|| None::<Vec<Booking>>);

    {
        let bookings = bookings.clone();
        let navigator = navigator.clone();
        use_effect_with(session.status(), move |status| {
            match status {
                SessionStatus::LoggedOut => navigator.push(&Route::Login),
                SessionStatus::LoggedIn => {
                    let bookings = bookings.clone();
                    let navigator = navigator.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match booking_service::my_bookings().await {
                            Ok(list) => bookings.set(Some(list)),
                            Err(e) => redirect_to_error(&navigator, &e),
                        }
                    });
                }
                SessionStatus::Unknown => {}
            }
            || ()
        });
    }

    let on_cancel = {
        let bookings = bookings.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let bookings = bookings.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match booking_service::update_booking_state(&id, BookingState::Cancelled).await {
                    Ok(updated) => {
                        let list: Vec<Booking> = bookings
                            .as_ref()
                            .map(|current| {
                                current
                                    .iter()
                                    .map(|b| if b.id == updated.id { updated.clone() } else { b.clone() })
                                    .collect()
                            })
                            .unwrap_or_default();
                        bookings.set(Some(list));
                        toasts.success("Reserva cancelada");
                    }
                    Err(e) => {
                        log::error!("❌ Error cancelando reserva {}: {}", id, e);
                        toasts.error(&format!("No se pudo cancelar la reserva: {}", e));
                    }
                }
            });
        })
    };

    let on_delete = {
        let bookings = bookings.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let bookings = bookings.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match booking_service::delete_booking(&id).await {
                    Ok(()) => {
                        let list: Vec<Booking> = bookings
                            .as_ref()
                            .map(|current| {
                                current.iter().filter(|b| b.id != id).cloned().collect()
                            })
                            .unwrap_or_default();
                        bookings.set(Some(list));
                        toasts.success("Reserva eliminada del historial");
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando reserva {}: {}", id, e);
                        toasts.error("No se pudo eliminar la reserva");
                    }
                }
            });
        })
    };

    let Some(list) = (*bookings).clone() else {
        return html! { <div class="loading">{ "Cargando reservas..." }</div> };
    };

    html! {
        <div class="my-bookings">
            <h1>{ "Mis reservas" }</h1>
            if list.is_empty() {
                <div class="empty-state">
                    { "Todavía no tienes ninguna reserva" }
                </div>
            } else {
                <ul class="booking-list">
                    { for list.iter().map(|booking| {
                        let name = booking
                            .apartment_name
                            .clone()
                            .unwrap_or_else(|| booking.apartment_id.clone());
                        let cancel = {
                            let on_cancel = on_cancel.clone();
                            let id = booking.id.clone();
                            Callback::from(move |_| on_cancel.emit(id.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = booking.id.clone();
                            Callback::from(move |_| on_delete.emit(id.clone()))
                        };
                        html! {
                            <li class="booking-item" key={booking.id.clone()}>
                                <div class="booking-info">
                                    <span class="booking-apartment">{ name }</span>
                                    <span class="booking-dates">
                                        { format!("{} → {}", booking.check_in, booking.check_out) }
                                    </span>
                                    <span class="booking-guests">
                                        { format!("{} huéspedes", booking.guests) }
                                    </span>
                                    <span class="booking-total">
                                        { format!("{:.2} EUR", booking.total_cost) }
                                    </span>
                                </div>
                                <div class="booking-actions">
                                    <span class={classes!("state-chip", booking.state.css_class())}>
                                        { booking.state.label() }
                                    </span>
                                    if booking.state.is_active() {
                                        <button class="btn-cancel" onclick={cancel}>
                                            { "Cancelar" }
                                        </button>
                                    } else {
                                        <button class="btn-delete" onclick={delete}>
                                            { "Eliminar" }
                                        </button>
                                    }
                                </div>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
