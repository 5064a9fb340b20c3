// ============================================================================
// USE SESSION HOOK - Acceso al estado de autenticación desde componentes
// ============================================================================

use yew::prelude::*;

use crate::models::User;
use crate::session::{Session, SessionStatus};

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub state: UseReducerHandle<Session>,
    /// Cierra sesión en el backend y limpia el estado local
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn user(&self) -> Option<User> {
        self.state.user.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin()
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    use_context::<UseSessionHandle>().expect("SessionProvider no está montado")
}
