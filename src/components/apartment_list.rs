// ============================================================================
// APARTMENT LIST - Página principal con buscador y resultados paginados
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::apartment_card::ApartmentCard;
use crate::hooks::use_apartment_search;
use crate::models::ApartmentSearchQuery;
use crate::routes::{redirect_to_error, Route};
use crate::utils::constants::{DEFAULT_PER_PAGE, STORAGE_KEY_SEARCH_PREFS};
use crate::utils::storage::remove_from_storage;

#[function_component(ApartmentList)]
pub fn apartment_list() -> Html {
    let search = use_apartment_search();
    let navigator = use_navigator().expect("ApartmentList fuera del router");

    // Un fallo cargando el listado no deja nada que mostrar
    {
        let navigator = navigator.clone();
        use_effect_with(search.error.clone(), move |error| {
            if let Some(e) = error {
                redirect_to_error(&navigator, e);
            }
            || ()
        });
    }

    let q_ref = use_node_ref();
    let capacity_ref = use_node_ref();
    let price_min_ref = use_node_ref();
    let price_max_ref = use_node_ref();

    let on_submit = {
        let q_ref = q_ref.clone();
        let capacity_ref = capacity_ref.clone();
        let price_min_ref = price_min_ref.clone();
        let price_max_ref = price_max_ref.clone();
        let run_search = search.search.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let q = q_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value().trim().to_string())
                .filter(|value| !value.is_empty());
            let capacity = capacity_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<u32>().ok());
            let price_min = price_min_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<f64>().ok());
            let price_max = price_max_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<f64>().ok());

            run_search.emit(ApartmentSearchQuery {
                q,
                capacity,
                price_min,
                price_max,
                page: 1,
                per_page: DEFAULT_PER_PAGE,
            });
        })
    };

    let on_clear = {
        let q_ref = q_ref.clone();
        let capacity_ref = capacity_ref.clone();
        let price_min_ref = price_min_ref.clone();
        let price_max_ref = price_max_ref.clone();
        let run_search = search.search.clone();

        Callback::from(move |_: MouseEvent| {
            if let Err(e) = remove_from_storage(STORAGE_KEY_SEARCH_PREFS) {
                log::warn!("⚠️ No se pudieron borrar las preferencias: {}", e);
            }
            for input_ref in [&q_ref, &price_min_ref, &price_max_ref] {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
            if let Some(select) = capacity_ref.cast::<HtmlSelectElement>() {
                select.set_value("");
            }
            run_search.emit(ApartmentSearchQuery::default());
        })
    };

    let on_view = {
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            navigator.push(&Route::ApartmentDetail { id });
        })
    };

    let query = &search.query;

    html! {
        <div class="apartment-list-page">
            <form class="search-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="search-q">{ "Buscar" }</label>
                    <input
                        type="text"
                        id="search-q"
                        placeholder="Nombre o descripción"
                        ref={q_ref}
                        value={query.q.clone().unwrap_or_default()}
                    />
                </div>
                <div class="form-group">
                    <label for="search-capacity">{ "Huéspedes" }</label>
                    <select id="search-capacity" ref={capacity_ref}>
                        <option value="" selected={query.capacity.is_none()}>
                            { "Cualquiera" }
                        </option>
                        { for (1..=8u32).map(|n| html! {
                            <option
                                value={n.to_string()}
                                selected={query.capacity == Some(n)}
                            >
                                { n }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="search-price-min">{ "Precio mín." }</label>
                    <input
                        type="number"
                        id="search-price-min"
                        min="0"
                        step="1"
                        ref={price_min_ref}
                        value={query.price_min.map(|p| p.to_string()).unwrap_or_default()}
                    />
                </div>
                <div class="form-group">
                    <label for="search-price-max">{ "Precio máx." }</label>
                    <input
                        type="number"
                        id="search-price-max"
                        min="0"
                        step="1"
                        ref={price_max_ref}
                        value={query.price_max.map(|p| p.to_string()).unwrap_or_default()}
                    />
                </div>
                <button type="submit" class="btn-search">{ "Buscar" }</button>
                <button type="button" class="btn-secondary" onclick={on_clear}>
                    { "Limpiar" }
                </button>
            </form>

            {
                if search.loading {
                    html! { <div class="loading">{ "Cargando apartamentos..." }</div> }
                } else if let Some(page) = &search.page {
                    let total_pages = page.total_pages();
                    html! {
                        <>
                            if page.apartments.is_empty() {
                                <div class="empty-state">
                                    { "No hay apartamentos que cumplan los criterios" }
                                </div>
                            } else {
                                <div class="apartment-grid">
                                    { for page.apartments.iter().map(|apartment| html! {
                                        <ApartmentCard
                                            key={apartment.id.clone()}
                                            apartment={apartment.clone()}
                                            on_view={on_view.clone()}
                                        />
                                    }) }
                                </div>
                            }
                            if total_pages > 1 {
                                <div class="pagination">
                                    <button
                                        class="btn-page"
                                        disabled={page.page <= 1}
                                        onclick={{
                                            let go = search.go_to_page.clone();
                                            let current = page.page;
                                            Callback::from(move |_| go.emit(current - 1))
                                        }}
                                    >
                                        { "‹ Anterior" }
                                    </button>
                                    <span class="page-label">
                                        { format!("Página {} de {}", page.page, total_pages) }
                                    </span>
                                    <button
                                        class="btn-page"
                                        disabled={page.page >= total_pages}
                                        onclick={{
                                            let go = search.go_to_page.clone();
                                            let current = page.page;
                                            Callback::from(move |_| go.emit(current + 1))
                                        }}
                                    >
                                        { "Siguiente ›" }
                                    </button>
                                </div>
                            }
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
