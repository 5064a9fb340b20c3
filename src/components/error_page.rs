use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{ErrorQuery, Route};

/// Página de error a la que redirigen los fallos de carga
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let location = use_location().expect("ErrorPage sin location");
    let navigator = use_navigator().expect("ErrorPage fuera del router");

    let query = location.query::<ErrorQuery>().unwrap_or_default();
    let message = if query.message.is_empty() {
        "Algo ha ido mal".to_string()
    } else {
        query.message
    };

    let on_back = Callback::from(move |_| navigator.push(&Route::Home));

    html! {
        <div class="error-page">
            <div class="error-icon">{ "⚠️" }</div>
            if query.code > 0 {
                <h1>{ format!("Error {}", query.code) }</h1>
            } else {
                <h1>{ "Error" }</h1>
            }
            <p class="error-message">{ message }</p>
            <button class="btn-back" onclick={on_back}>
                { "Volver a la búsqueda" }
            </button>
        </div>
    }
}
