// ============================================================================
// PROFILE - Cuenta del usuario y dashboard admin con pestañas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::admin::{BookingsTab, FiltersTab, StatsTab};
use crate::hooks::use_session;
use crate::models::UserRole;
use crate::routes::Route;
use crate::session::SessionStatus;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Stats,
    Filters,
    Bookings,
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("Profile fuera del router");
    let tab = use_state(|| AdminTab::Stats);

    {
        let status = session.status();
        let navigator = navigator.clone();
        use_effect_with(status, move |status| {
            if *status == SessionStatus::LoggedOut {
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    let Some(user) = session.user() else {
        return html! { <div class="loading">{ "Cargando perfil..." }</div> };
    };

    let role_label = match user.role {
        UserRole::Admin => "Administrador",
        UserRole::User => "Usuario",
    };

    let tab_button = |target: AdminTab, label: &'static str| {
        let tab = tab.clone();
        let active = *tab == target;
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        html! {
            <button
                class={classes!("tab-button", active.then_some("tab-active"))}
                onclick={onclick}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="profile-page">
            <section class="account-card">
                <div class="account-avatar">{ "👤" }</div>
                <div class="account-info">
                    <h2>{ &user.name }</h2>
                    <p class="account-email">{ &user.email }</p>
                    <span class="chip">{ role_label }</span>
                    if let Some(created) = &user.created_at {
                        <p class="account-since">{ format!("Miembro desde {}", created) }</p>
                    }
                </div>
            </section>

            if user.is_admin() {
                <section class="admin-dashboard">
                    <nav class="tab-bar">
                        { tab_button(AdminTab::Stats, "Estadísticas") }
                        { tab_button(AdminTab::Filters, "Reglas de precio") }
                        { tab_button(AdminTab::Bookings, "Reservas") }
                    </nav>
                    <div class="tab-content">
                        {
                            match *tab {
                                AdminTab::Stats => html! { <StatsTab /> },
                                AdminTab::Filters => html! { <FiltersTab /> },
                                AdminTab::Bookings => html! { <BookingsTab /> },
                            }
                        }
                    </div>
                </section>
            }
        </div>
    }
}
