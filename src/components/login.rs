// ============================================================================
// LOGIN - Inicio de sesión y registro
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::use_toast;
use crate::hooks::use_session;
use crate::models::{LoginRequest, RegisterRequest};
use crate::routes::Route;
use crate::services::auth_service;
use crate::session::{SessionAction, SessionStatus};

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("Login fuera del router");
    let toasts = use_toast();

    let registering = use_state(|| false);
    let busy = use_state(|| false);

    // Con sesión iniciada esta página no pinta nada
    {
        let navigator = navigator.clone();
        use_effect_with(session.status(), move |status| {
            if *status == SessionStatus::LoggedIn {
                navigator.push(&Route::Home);
            }
            || ()
        });
    }

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_toggle = {
        let registering = registering.clone();
        Callback::from(move |_| registering.set(!*registering))
    };

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let registering = registering.clone();
        let busy = busy.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        let state = session.state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value().trim().to_string())
                .unwrap_or_default();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value().trim().to_string())
                .unwrap_or_default();

            if email.is_empty() || password.is_empty() || (*registering && name.is_empty()) {
                toasts.info("Completa todos los campos");
                return;
            }

            busy.set(true);

            if *registering {
                let request = RegisterRequest {
                    name,
                    email,
                    password,
                };
                let registering = registering.clone();
                let busy = busy.clone();
                let toasts = toasts.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match auth_service::register(&request).await {
                        Ok(_) => {
                            toasts.success("Cuenta creada, ya puedes iniciar sesión");
                            registering.set(false);
                        }
                        Err(e) => {
                            log::error!("❌ Error en el registro: {}", e);
                            toasts.error(&format!("No se pudo crear la cuenta: {}", e));
                        }
                    }
                    busy.set(false);
                });
            } else {
                let request = LoginRequest { email, password };
                let busy = busy.clone();
                let toasts = toasts.clone();
                let navigator = navigator.clone();
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match auth_service::login(&request).await {
                        Ok(user) => {
                            toasts.success(&format!("Bienvenido, {}", user.name));
                            state.dispatch(SessionAction::Login(user));
                            navigator.push(&Route::Home);
                        }
                        Err(e) => {
                            log::error!("❌ Error iniciando sesión: {}", e);
                            toasts.error(&format!("No se pudo iniciar sesión: {}", e));
                        }
                    }
                    busy.set(false);
                });
            }
        })
    };

    html! {
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">{ "🏠" }</div>
                    <h1>{ "StayFlow" }</h1>
                    <p>{ "Apartamentos para tu próxima estancia" }</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    if *registering {
                        <div class="form-group">
                            <label for="register-name">{ "Nombre" }</label>
                            <input
                                type="text"
                                id="register-name"
                                placeholder="Tu nombre"
                                ref={name_ref}
                            />
                        </div>
                    }
                    <div class="form-group">
                        <label for="login-email">{ "Email" }</label>
                        <input
                            type="email"
                            id="login-email"
                            placeholder="tu@email.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">{ "Contraseña" }</label>
                        <input
                            type="password"
                            id="login-password"
                            placeholder="Tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={*busy}>
                        {
                            match (*registering, *busy) {
                                (_, true) => "Enviando...",
                                (true, _) => "Crear cuenta",
                                (false, _) => "Iniciar sesión",
                            }
                        }
                    </button>

                    <div class="login-footer">
                        <button type="button" class="btn-toggle-register" onclick={on_toggle}>
                            {
                                if *registering {
                                    "¿Ya tienes cuenta? Inicia sesión"
                                } else {
                                    "¿No tienes cuenta? Regístrate"
                                }
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
