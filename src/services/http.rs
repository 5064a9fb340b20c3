// ============================================================================
// HTTP - Transporte común hacia el backend (stateless)
// ============================================================================
// Todas las peticiones llevan cookies de sesión (credentials: include).
// Un 401 en rutas protegidas dispara UNA renovación y UN reintento; si la
// renovación falla se emite el evento de sesión expirada.
// ============================================================================

use std::cell::Cell;
use std::future::Future;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::models::ApiMessage;
use crate::utils::constants::{API_PREFIX, BACKEND_URL, SESSION_EXPIRED_EVENT};

/// Error de la capa HTTP
#[derive(Error, Clone, PartialEq, Debug)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Respuesta inválida: {0}")]
    Parse(String),

    #[error("Renovación de sesión en curso")]
    RefreshPending,
}

impl ApiError {
    /// Código HTTP si el error proviene de una respuesta del servidor
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Mensaje y código para la página de error (0 = sin respuesta HTTP)
    pub fn redirect_params(&self) -> (String, u16) {
        match self {
            ApiError::Status { code, message } => (message.clone(), *code),
            other => (other.to_string(), 0),
        }
    }
}

/// URL absoluta de un endpoint de la API
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", BACKEND_URL, API_PREFIX, path)
}

/// Rutas donde un 401 es respuesta normal y no debe disparar renovación
fn is_auth_exempt(path: &str) -> bool {
    matches!(
        path,
        "/auth/login" | "/auth/register" | "/auth/refresh" | "/auth/logout" | "/users/me"
    )
}

thread_local! {
    // Evita renovaciones en cascada cuando varias peticiones reciben 401 a la vez
    static REFRESH_IN_FLIGHT: Cell<bool> = const { Cell::new(false) };
}

/// Notifica al resto de la aplicación que la sesión ya no es válida
pub fn emit_session_expired() {
    log::warn!("🔐 Sesión expirada, notificando a la aplicación");
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if let Ok(event) = web_sys::Event::new(SESSION_EXPIRED_EVENT) {
            let _ = window.dispatch_event(&event);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = SESSION_EXPIRED_EVENT;
}

/// Ejecuta `attempt`; ante un 401 en ruta protegida renueva la sesión una vez
/// y reintenta. Si otra renovación está en curso devuelve `RefreshPending`
/// para que el llamante reintente más tarde.
async fn send_with_refresh<T, A, AFut, R, RFut>(
    path: &str,
    attempt: A,
    refresh: R,
) -> Result<T, ApiError>
where
    A: Fn() -> AFut,
    AFut: Future<Output = Result<T, ApiError>>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = Result<(), ApiError>>,
{
    let first = attempt().await;

    let unauthorized = matches!(&first, Err(ApiError::Status { code: 401, .. }));
    if !unauthorized || is_auth_exempt(path) {
        return first;
    }

    if REFRESH_IN_FLIGHT.with(|f| f.get()) {
        return Err(ApiError::RefreshPending);
    }

    REFRESH_IN_FLIGHT.with(|f| f.set(true));
    log::info!("🔄 Token expirado en {}, renovando sesión...", path);
    let refreshed = refresh().await;
    REFRESH_IN_FLIGHT.with(|f| f.set(false));

    match refreshed {
        Ok(()) => {
            log::info!("✅ Sesión renovada, reintentando petición");
            attempt().await
        }
        Err(err) => {
            log::error!("❌ No se pudo renovar la sesión: {}", err);
            emit_session_expired();
            first
        }
    }
}

/// Renueva las cookies de sesión contra el backend (sin interceptor)
pub async fn refresh_session() -> Result<(), ApiError> {
    let response = Request::post(&api_url("/auth/refresh"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(fail_from(response).await)
    }
}

/// Convierte una respuesta no-ok en error, extrayendo el mensaje del cuerpo
async fn fail_from(response: Response) -> ApiError {
    let code = response.status();
    let fallback = response.status_text();
    let message = match response.text().await {
        Ok(text) => match serde_json::from_str::<ApiMessage>(&text) {
            Ok(body) if !body.message.is_empty() => body.message,
            _ if !text.is_empty() => text,
            _ => fallback,
        },
        Err(_) => fallback,
    };
    ApiError::Status { code, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(fail_from(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn get_once<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_once<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_empty_once<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn put_once<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn delete_once(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(fail_from(response).await)
    }
}

/// GET con renovación automática de sesión
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send_with_refresh(path, || get_once::<T>(path), refresh_session).await
}

/// POST con cuerpo JSON y renovación automática de sesión
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_refresh(path, || post_once::<B, T>(path, body), refresh_session).await
}

/// POST sin cuerpo y renovación automática de sesión
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send_with_refresh(path, || post_empty_once::<T>(path), refresh_session).await
}

/// PUT con cuerpo JSON y renovación automática de sesión
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_refresh(path, || put_once::<B, T>(path, body), refresh_session).await
}

/// DELETE con renovación automática de sesión
pub async fn delete(path: &str) -> Result<(), ApiError> {
    send_with_refresh(path, || delete_once(path), refresh_session).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn unauthorized() -> ApiError {
        ApiError::Status {
            code: 401,
            message: "token expirado".to_string(),
        }
    }

    #[test]
    fn success_skips_refresh() {
        let refreshes = Cell::new(0);
        let result: Result<u32, ApiError> = block_on(send_with_refresh(
            "/apartments",
            || async { Ok(7) },
            || async {
                refreshes.set(refreshes.get() + 1);
                Ok(())
            },
        ));
        assert_eq!(result, Ok(7));
        assert_eq!(refreshes.get(), 0);
    }

    #[test]
    fn non_401_errors_pass_through() {
        let refreshes = Cell::new(0);
        let result: Result<u32, ApiError> = block_on(send_with_refresh(
            "/apartments/nope",
            || async {
                Err(ApiError::Status {
                    code: 404,
                    message: "no existe".to_string(),
                })
            },
            || async {
                refreshes.set(refreshes.get() + 1);
                Ok(())
            },
        ));
        assert_eq!(result.unwrap_err().status(), Some(404));
        assert_eq!(refreshes.get(), 0);
    }

    #[test]
    fn retries_exactly_once_after_refresh() {
        let attempts = Cell::new(0);
        let refreshes = Cell::new(0);
        let result: Result<u32, ApiError> = block_on(send_with_refresh(
            "/bookings",
            || async {
                attempts.set(attempts.get() + 1);
                if attempts.get() == 1 {
                    Err(unauthorized())
                } else {
                    Ok(42)
                }
            },
            || async {
                refreshes.set(refreshes.get() + 1);
                Ok(())
            },
        ));
        assert_eq!(result, Ok(42));
        assert_eq!(attempts.get(), 2);
        assert_eq!(refreshes.get(), 1);
    }

    #[test]
    fn auth_routes_never_trigger_refresh() {
        for path in ["/auth/login", "/auth/register", "/auth/refresh", "/auth/logout"] {
            let refreshes = Cell::new(0);
            let result: Result<u32, ApiError> = block_on(send_with_refresh(
                path,
                || async { Err(unauthorized()) },
                || async {
                    refreshes.set(refreshes.get() + 1);
                    Ok(())
                },
            ));
            assert_eq!(result.unwrap_err().status(), Some(401), "{}", path);
            assert_eq!(refreshes.get(), 0, "{}", path);
        }
    }

    #[test]
    fn exempt_table_lists_auth_routes_and_session_probe() {
        for path in [
            "/auth/login",
            "/auth/register",
            "/auth/refresh",
            "/auth/logout",
            "/users/me",
        ] {
            assert!(is_auth_exempt(path), "{}", path);
        }
        for path in ["/apartments", "/bookings", "/filters", "/reviews"] {
            assert!(!is_auth_exempt(path), "{}", path);
        }
    }

    #[test]
    fn session_probe_never_triggers_refresh() {
        let refreshes = Cell::new(0);
        let result: Result<u32, ApiError> = block_on(send_with_refresh(
            "/users/me",
            || async { Err(unauthorized()) },
            || async {
                refreshes.set(refreshes.get() + 1);
                Ok(())
            },
        ));
        assert_eq!(result.unwrap_err().status(), Some(401));
        assert_eq!(refreshes.get(), 0);
    }

    #[test]
    fn concurrent_401_reports_refresh_pending() {
        REFRESH_IN_FLIGHT.with(|f| f.set(true));
        let result: Result<u32, ApiError> = block_on(send_with_refresh(
            "/bookings",
            || async { Err(unauthorized()) },
            || async { Ok(()) },
        ));
        REFRESH_IN_FLIGHT.with(|f| f.set(false));
        assert_eq!(result, Err(ApiError::RefreshPending));
    }

    #[test]
    fn failed_refresh_returns_original_error_and_releases_flag() {
        let attempts = Cell::new(0);
        let result: Result<u32, ApiError> = block_on(send_with_refresh(
            "/bookings",
            || async {
                attempts.set(attempts.get() + 1);
                Err(unauthorized())
            },
            || async {
                Err(ApiError::Status {
                    code: 401,
                    message: "refresh inválido".to_string(),
                })
            },
        ));
        assert_eq!(result.unwrap_err(), unauthorized());
        assert_eq!(attempts.get(), 1);
        assert!(!REFRESH_IN_FLIGHT.with(|f| f.get()));
    }

    #[test]
    fn error_redirect_params() {
        let status = ApiError::Status {
            code: 404,
            message: "Apartamento no encontrado".to_string(),
        };
        assert_eq!(
            status.redirect_params(),
            ("Apartamento no encontrado".to_string(), 404)
        );

        let network = ApiError::Network("failed to fetch".to_string());
        let (message, code) = network.redirect_params();
        assert_eq!(code, 0);
        assert!(message.contains("failed to fetch"));
    }

    #[test]
    fn api_url_joins_prefix() {
        assert_eq!(
            api_url("/apartments"),
            format!("{}{}/apartments", BACKEND_URL, API_PREFIX)
        );
    }
}
