// ============================================================================
// AUTH SERVICE - Login, registro y cierre de sesión
// ============================================================================
// El backend entrega las credenciales en cookies httpOnly, así que aquí no
// se toca ningún token: tras el login se pide el perfil a /users/me.
// ============================================================================

use crate::models::{ApiMessage, LoginRequest, RegisterRequest, User};
use crate::services::http::{self, ApiError};
use crate::services::user_service;

/// Inicia sesión y devuelve el perfil del usuario
pub async fn login(request: &LoginRequest) -> Result<User, ApiError> {
    log::info!("🔐 Iniciando sesión: {}", request.email);

    let _: ApiMessage = http::post_json("/auth/login", request).await?;
    let user = user_service::fetch_me().await?;

    log::info!("✅ Sesión iniciada: {} ({:?})", user.name, user.role);
    Ok(user)
}

/// Da de alta un usuario nuevo; el alta no inicia sesión
pub async fn register(request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
    log::info!("📝 Registrando usuario: {}", request.email);
    http::post_json("/auth/register", request).await
}

/// Cierra la sesión en el backend e invalida las cookies
pub async fn logout() -> Result<(), ApiError> {
    let _: ApiMessage = http::post_empty("/auth/logout").await?;
    log::info!("👋 Sesión cerrada");
    Ok(())
}

/// Renueva las cookies de sesión (la usa el temporizador periódico)
pub async fn refresh() -> Result<(), ApiError> {
    http::refresh_session().await
}
