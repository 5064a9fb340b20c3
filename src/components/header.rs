use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::Route;
use crate::session::SessionStatus;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("Header fuera del router");

    let on_logout = {
        let logout = session.logout.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    html! {
        <header class="app-header">
            <Link<Route> to={Route::Home} classes="brand">
                { "🏠 StayFlow" }
            </Link<Route>>
            <nav class="main-nav">
                {
                    match session.status() {
                        SessionStatus::LoggedIn => {
                            let name = session.user().map(|u| u.name).unwrap_or_default();
                            html! {
                                <>
                                    <Link<Route> to={Route::MyBookings} classes="nav-link">
                                        { "Mis reservas" }
                                    </Link<Route>>
                                    <Link<Route> to={Route::Profile} classes="nav-link">
                                        { "Perfil" }
                                    </Link<Route>>
                                    <span class="nav-user">{ name }</span>
                                    <button class="btn-logout" onclick={on_logout}>
                                        { "Salir" }
                                    </button>
                                </>
                            }
                        }
                        SessionStatus::LoggedOut => html! {
                            <Link<Route> to={Route::Login} classes="btn-login-link">
                                { "Iniciar sesión" }
                            </Link<Route>>
                        },
                        // Mientras se restaura la sesión no mostramos nada
                        SessionStatus::Unknown => html! {},
                    }
                }
            </nav>
        </header>
    }
}
