// ============================================================================
// REVIEWS - Listado y alta de reseñas de un apartamento
// ============================================================================

use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::hooks::use_session;
use crate::models::{average_rating, CreateReviewRequest, Review};
use crate::services::review_service;

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub apartment_id: String,
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    let session = use_session();
    let toasts = use_toast();
    let reviews = use_state(Vec::<Review>::new);
    let loading = use_state(|| true);

    {
        let reviews = reviews.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(props.apartment_id.clone(), move |apartment_id| {
            let apartment_id = apartment_id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match review_service::list_reviews(&apartment_id).await {
                    Ok(list) => reviews.set(list),
                    Err(e) => {
                        log::warn!("⚠️ No se pudieron cargar las reseñas: {}", e);
                        toasts.error("No se pudieron cargar las reseñas");
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let rating_ref = use_node_ref();
    let comment_ref = use_node_ref();

    let on_submit = {
        let rating_ref = rating_ref.clone();
        let comment_ref = comment_ref.clone();
        let reviews = reviews.clone();
        let toasts = toasts.clone();
        let apartment_id = props.apartment_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let rating = rating_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<u8>().ok())
                .unwrap_or(5);
            let comment_input = comment_ref.cast::<HtmlTextAreaElement>();
            let comment = comment_input
                .as_ref()
                .map(|area| area.value().trim().to_string())
                .unwrap_or_default();

            if comment.is_empty() {
                toasts.info("Escribe un comentario antes de publicar");
                return;
            }

            let request = CreateReviewRequest {
                apartment_id: apartment_id.clone(),
                rating,
                comment,
            };
            let reviews = reviews.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match review_service::create_review(&request).await {
                    Ok(review) => {
                        let mut list = (*reviews).clone();
                        list.insert(0, review);
                        reviews.set(list);
                        toasts.success("Reseña publicada");
                    }
                    Err(e) => {
                        log::error!("❌ Error publicando reseña: {}", e);
                        toasts.error(&format!("No se pudo publicar la reseña: {}", e));
                    }
                }
            });

            if let Some(area) = comment_input {
                area.set_value("");
            }
        })
    };

    let on_delete = {
        let reviews = reviews.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let reviews = reviews.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match review_service::delete_review(&id).await {
                    Ok(()) => {
                        let list: Vec<Review> =
                            reviews.iter().filter(|r| r.id != id).cloned().collect();
                        reviews.set(list);
                        toasts.success("Reseña eliminada");
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando reseña: {}", e);
                        toasts.error("No se pudo eliminar la reseña");
                    }
                }
            });
        })
    };

    let current_user_id = session.user().map(|u| u.id);

    html! {
        <section class="reviews">
            <div class="reviews-header">
                <h2>{ "Reseñas" }</h2>
                {
                    match average_rating(&reviews) {
                        Some(avg) => html! {
                            <span class="reviews-average">
                                { format!("★ {:.1} · {} reseñas", avg, reviews.len()) }
                            </span>
                        },
                        None => html! {
                            <span class="reviews-average">{ "Sin reseñas todavía" }</span>
                        },
                    }
                }
            </div>

            if *loading {
                <div class="loading">{ "Cargando reseñas..." }</div>
            } else {
                <ul class="review-list">
                    { for reviews.iter().map(|review| {
                        let own = current_user_id.as_deref() == Some(review.user_id.as_str());
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = review.id.clone();
                            Callback::from(move |_| on_delete.emit(id.clone()))
                        };
                        html! {
                            <li class="review-item" key={review.id.clone()}>
                                <div class="review-head">
                                    <span class="review-author">{ &review.user_name }</span>
                                    <span class="review-stars">{ stars(review.rating) }</span>
                                    <span class="review-date">{ &review.date }</span>
                                    if own {
                                        <button class="btn-delete-review" onclick={delete}>
                                            { "Eliminar" }
                                        </button>
                                    }
                                </div>
                                <p class="review-comment">{ &review.comment }</p>
                            </li>
                        }
                    }) }
                </ul>
            }

            if session.is_logged_in() {
                <form class="review-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="review-rating">{ "Puntuación" }</label>
                        <select id="review-rating" ref={rating_ref}>
                            { for (1..=5u8).rev().map(|n| html! {
                                <option value={n.to_string()} selected={n == 5}>
                                    { stars(n) }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="review-comment">{ "Comentario" }</label>
                        <textarea
                            id="review-comment"
                            placeholder="Cuenta tu experiencia"
                            ref={comment_ref}
                        />
                    </div>
                    <button type="submit" class="btn-publish">{ "Publicar reseña" }</button>
                </form>
            } else {
                <p class="review-login-hint">{ "Inicia sesión para dejar tu reseña" }</p>
            }
        </section>
    }
}
