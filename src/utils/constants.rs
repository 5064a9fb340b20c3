/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8080 (por defecto)
/// - Producción: via BACKEND_URL en .env (ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Prefijo común de la API REST
pub const API_PREFIX: &str = "/api/v1";

/// Intervalo del timer de refresh del access token (9 minutos,
/// el backend emite tokens de 10)
pub const TOKEN_REFRESH_SECS: u32 = 9 * 60;

/// Duración de un toast en pantalla
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Nombre del evento global que fuerza el logout cuando la sesión
/// no se pudo renovar
pub const SESSION_EXPIRED_EVENT: &str = "session-expired";

/// Clave de localStorage para las preferencias de búsqueda
pub const STORAGE_KEY_SEARCH_PREFS: &str = "stayflow_searchPrefs";

/// Paginación por defecto del listado de apartamentos
pub const DEFAULT_PER_PAGE: u32 = 12;
