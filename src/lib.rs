// ============================================================================
// STAYFLOW - Frontend de reservas de apartamentos (Yew)
// ============================================================================
// - components: páginas y widgets de la UI
// - hooks: sesión y búsqueda como hooks reutilizables
// - services: SOLO comunicación con la API (cookies httpOnly)
// - models: estructuras compartidas con el backend
// - pricing: evaluación local de reglas de precio por noche
// ============================================================================

pub mod components;
pub mod hooks;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod services;
pub mod session;
pub mod utils;

pub use components::App;
