use serde::{de::DeserializeOwned, Serialize};
use web_sys::Storage;

// Helpers finos sobre localStorage. Solo se guardan preferencias de UI
// (por ejemplo la última búsqueda); los datos de dominio viven en el backend.

fn storage() -> Result<Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage no disponible".to_string())
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("No se pudieron serializar las preferencias: {}", e))?;
    storage()?
        .set_item(key, &json)
        .map_err(|_| format!("No se pudo escribir '{}' en localStorage", key))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = storage().ok()?.get_item(key).ok()??;
    // Un valor corrupto o de una versión vieja se descarta en silencio
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    storage()?
        .remove_item(key)
        .map_err(|_| format!("No se pudo borrar '{}' de localStorage", key))
}
