// ============================================================================
// USE APARTMENT SEARCH - Búsqueda paginada con preferencias persistentes
// ============================================================================
// Cada cambio de consulta relanza la petición; los criterios se guardan en
// localStorage para recuperarlos en la próxima visita (siempre en página 1).
// ============================================================================

use yew::prelude::*;

use crate::models::{ApartmentPage, ApartmentSearchQuery};
use crate::services::{apartment_service, ApiError};
use crate::utils::constants::STORAGE_KEY_SEARCH_PREFS;
use crate::utils::storage::{load_from_storage, save_to_storage};

#[derive(Clone, PartialEq)]
pub struct UseApartmentSearchHandle {
    pub page: Option<ApartmentPage>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub query: ApartmentSearchQuery,
    /// Lanza una búsqueda nueva y guarda los criterios
    pub search: Callback<ApartmentSearchQuery>,
    /// Cambia de página manteniendo los criterios actuales
    pub go_to_page: Callback<u32>,
}

fn initial_query() -> ApartmentSearchQuery {
    match load_from_storage::<ApartmentSearchQuery>(STORAGE_KEY_SEARCH_PREFS) {
        Some(mut saved) => {
            saved.page = 1;
            saved
        }
        None => ApartmentSearchQuery::default(),
    }
}

#[hook]
pub fn use_apartment_search() -> UseApartmentSearchHandle {
    let query = use_state(initial_query);
    let page = use_state(|| None::<ApartmentPage>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<ApiError>);

    {
        let page = page.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((*query).clone(), move |query| {
            let query = query.clone();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match apartment_service::search_apartments(&query).await {
                    Ok(result) => {
                        page.set(Some(result));
                        loading.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Error buscando apartamentos: {}", e);
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let search = {
        let query = query.clone();
        Callback::from(move |new_query: ApartmentSearchQuery| {
            if let Err(e) = save_to_storage(STORAGE_KEY_SEARCH_PREFS, &new_query) {
                log::warn!("⚠️ No se pudieron guardar las preferencias de búsqueda: {}", e);
            }
            query.set(new_query);
        })
    };

    let go_to_page = {
        let query = query.clone();
        Callback::from(move |target: u32| {
            let mut next = (*query).clone();
            next.page = target;
            query.set(next);
        })
    };

    UseApartmentSearchHandle {
        page: (*page).clone(),
        loading: *loading,
        error: (*error).clone(),
        query: (*query).clone(),
        search,
        go_to_page,
    }
}
