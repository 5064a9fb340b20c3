use crate::models::User;
use crate::services::http::{self, ApiError};

/// Perfil del usuario autenticado; 401 significa que no hay sesión
pub async fn fetch_me() -> Result<User, ApiError> {
    http::get_json("/users/me").await
}
