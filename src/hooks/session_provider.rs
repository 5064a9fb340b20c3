// ============================================================================
// SESSION PROVIDER - Restaura, renueva y comparte la sesión
// ============================================================================
// Al montar intenta restaurar la sesión desde las cookies, escucha el
// evento de expiración que emite la capa HTTP y mantiene un temporizador
// de renovación mientras el usuario siga autenticado.
// ============================================================================

use std::future::Future;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::hooks::use_session::UseSessionHandle;
use crate::services::{auth_service, http, user_service, ApiError};
use crate::session::{Session, SessionAction, SessionStatus};
use crate::utils::constants::{SESSION_EXPIRED_EVENT, TOKEN_REFRESH_SECS};

/// Un tick del temporizador: renueva la sesión y, si la renovación falla,
/// dispara la expiración para que el listener fuerce el logout con su aviso
async fn refresh_tick<R, RFut>(refresh: R, expire: impl FnOnce())
where
    R: FnOnce() -> RFut,
    RFut: Future<Output = Result<(), ApiError>>,
{
    if let Err(e) = refresh().await {
        log::warn!("⚠️ Renovación periódica fallida: {}", e);
        expire();
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(Session::default);
    let toasts = use_toast();

    // Restaurar sesión al arrancar
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("🔁 Restaurando sesión desde cookies...");
                match user_service::fetch_me().await {
                    Ok(user) => {
                        log::info!("✅ Sesión restaurada: {}", user.name);
                        state.dispatch(SessionAction::Restore(user));
                    }
                    Err(_) => {
                        log::info!("ℹ️ No hay sesión previa");
                        state.dispatch(SessionAction::RestoreFailed);
                    }
                }
            });
            || ()
        });
    }

    // La capa HTTP emite este evento cuando la renovación falla
    {
        let state = state.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            if let Some(window) = web_sys::window() {
                let on_expired = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
                    toasts.error("Tu sesión ha expirado, vuelve a iniciar sesión");
                    state.dispatch(SessionAction::Logout);
                });
                let _ = window.add_event_listener_with_callback(
                    SESSION_EXPIRED_EVENT,
                    on_expired.as_ref().unchecked_ref(),
                );
                // El provider vive tanto como la aplicación
                on_expired.forget();
            }
            || ()
        });
    }

    // Renovación periódica del access token mientras haya sesión
    let refresh_timer = use_mut_ref(|| None::<Interval>);
    {
        let refresh_timer = refresh_timer.clone();
        use_effect_with(state.status.clone(), move |status| {
            *refresh_timer.borrow_mut() = match status {
                SessionStatus::LoggedIn => {
                    log::info!("⏱️ Temporizador de renovación activado");
                    Some(Interval::new(TOKEN_REFRESH_SECS * 1_000, || {
                        wasm_bindgen_futures::spawn_local(refresh_tick(
                            auth_service::refresh,
                            http::emit_session_expired,
                        ));
                    }))
                }
                _ => None,
            };
            || ()
        });
    }

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = auth_service::logout().await {
                    log::warn!("⚠️ Error cerrando sesión en el backend: {}", e);
                }
                state.dispatch(SessionAction::Logout);
            });
        })
    };

    let handle = UseSessionHandle { state, logout };

    html! {
        <ContextProvider<UseSessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;

    #[test]
    fn successful_tick_keeps_session_alive() {
        let expirations = Cell::new(0);
        block_on(refresh_tick(
            || async { Ok(()) },
            || expirations.set(expirations.get() + 1),
        ));
        assert_eq!(expirations.get(), 0);
    }

    #[test]
    fn failed_tick_forces_session_expiry() {
        let expirations = Cell::new(0);
        block_on(refresh_tick(
            || async {
                Err(ApiError::Status {
                    code: 401,
                    message: "refresh caducado".to_string(),
                })
            },
            || expirations.set(expirations.get() + 1),
        ));
        assert_eq!(expirations.get(), 1);
    }
}
