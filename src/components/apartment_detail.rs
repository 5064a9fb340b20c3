// ============================================================================
// APARTMENT DETAIL - Ficha del apartamento y arranque de la reserva
// ============================================================================
// La selección de fechas vive aquí; al confirmar se llevan fechas y
// huéspedes en la query hasta la página de confirmación.
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::calendar::{stay_price, Calendar, DateRangeSelection};
use crate::components::reviews::Reviews;
use crate::hooks::use_session;
use crate::models::Apartment;
use crate::routes::{redirect_to_error, BookingQuery, Route};
use crate::services::apartment_service;

#[derive(Properties, PartialEq)]
pub struct ApartmentDetailProps {
    pub id: String,
}

#[function_component(ApartmentDetail)]
pub fn apartment_detail(props: &ApartmentDetailProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("ApartmentDetail fuera del router");

    let apartment = use_state(|| None::<Apartment>);
    let selection = use_state(DateRangeSelection::default);
    let guests = use_state(|| 1u32);
    let gallery_index = use_state(|| 0usize);

    {
        let apartment = apartment.clone();
        let navigator = navigator.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match apartment_service::get_apartment(&id).await {
                    Ok(found) => apartment.set(Some(found)),
                    Err(e) => {
                        log::error!("❌ Error cargando apartamento {}: {}", id, e);
                        redirect_to_error(&navigator, &e);
                    }
                }
            });
            || ()
        });
    }

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |next: DateRangeSelection| selection.set(next))
    };

    let guests_ref = use_node_ref();
    let on_guests_change = {
        let guests = guests.clone();
        let guests_ref = guests_ref.clone();
        Callback::from(move |_| {
            if let Some(value) = guests_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<u32>().ok())
            {
                guests.set(value);
            }
        })
    };

    let Some(apartment) = (*apartment).clone() else {
        return html! { <div class="loading">{ "Cargando apartamento..." }</div> };
    };

    let on_book = {
        let navigator = navigator.clone();
        let selection = *selection;
        let guests = *guests;
        let id = apartment.id.clone();
        let logged_in = session.is_logged_in();

        Callback::from(move |_| {
            if !logged_in {
                navigator.push(&Route::Login);
                return;
            }
            if let (Some(from), Some(to)) = (selection.check_in(), selection.check_out()) {
                let query = BookingQuery { from, to, guests };
                if navigator
                    .push_with_query(&Route::BookingConfirm { id: id.clone() }, &query)
                    .is_err()
                {
                    log::error!("❌ No se pudo construir la query de la reserva");
                }
            }
        })
    };

    let images = if apartment.images.is_empty() {
        vec![apartment.cover_image().to_string()]
    } else {
        apartment.images.clone()
    };
    let current_image = images
        .get(*gallery_index)
        .cloned()
        .unwrap_or_else(|| apartment.cover_image().to_string());

    html! {
        <div class="apartment-detail">
            <div class="detail-gallery">
                <img class="gallery-main" src={current_image} alt={apartment.name.clone()} />
                if images.len() > 1 {
                    <div class="gallery-thumbs">
                        { for images.iter().enumerate().map(|(i, src)| {
                            let select_image = {
                                let gallery_index = gallery_index.clone();
                                Callback::from(move |_| gallery_index.set(i))
                            };
                            html! {
                                <img
                                    key={i.to_string()}
                                    class={classes!(
                                        "gallery-thumb",
                                        (i == *gallery_index).then_some("active"),
                                    )}
                                    src={src.clone()}
                                    onclick={select_image}
                                />
                            }
                        }) }
                    </div>
                }
            </div>

            <div class="detail-info">
                <h1>{ &apartment.name }</h1>
                <p class="detail-price">
                    { format!("{:.2} EUR", apartment.price_per_night) }
                    <small>{ " / noche" }</small>
                </p>
                <p class="detail-description">{ &apartment.description }</p>

                <h2>{ "Servicios" }</h2>
                if apartment.services.is_empty() {
                    <p class="no-services">{ "Sin servicios listados" }</p>
                } else {
                    <ul class="service-list">
                        { for apartment.services.iter().map(|s| html! {
                            <li class="service-chip" key={s.clone()}>{ s }</li>
                        }) }
                    </ul>
                }
            </div>

            <div class="detail-booking">
                <h2>{ "Elige tus fechas" }</h2>
                <Calendar selection={*selection} on_select={on_select} />

                <div class="form-group">
                    <label for="detail-guests">{ "Huéspedes" }</label>
                    <select id="detail-guests" ref={guests_ref} onchange={on_guests_change}>
                        { for (1..=apartment.capacity.max(1)).map(|n| html! {
                            <option value={n.to_string()} selected={n == *guests}>
                                { n }
                            </option>
                        }) }
                    </select>
                </div>

                {
                    match selection.nights() {
                        Some(nights) => html! {
                            <p class="stay-preview">
                                { format!(
                                    "{} noches × {:.2} EUR = {:.2} EUR",
                                    nights,
                                    apartment.price_per_night,
                                    stay_price(nights, apartment.price_per_night),
                                ) }
                            </p>
                        },
                        None => html! {
                            <p class="stay-preview hint">
                                { "Selecciona entrada y salida en el calendario" }
                            </p>
                        },
                    }
                }

                <button
                    class="btn-book"
                    disabled={session.is_logged_in() && !selection.is_complete()}
                    onclick={on_book}
                >
                    {
                        if session.is_logged_in() {
                            "Reservar"
                        } else {
                            "Inicia sesión para reservar"
                        }
                    }
                </button>
            </div>

            <Reviews apartment_id={apartment.id.clone()} />
        </div>
    }
}
