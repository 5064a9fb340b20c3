// ============================================================================
// SESSION - Estado global de autenticación
// ============================================================================
// Máquina de estados pura; el provider de hooks/use_session.rs se encarga
// de hablar con el backend y de despachar las acciones.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::User;

/// Fase de la sesión: `Unknown` mientras se restaura al arrancar
#[derive(Clone, PartialEq, Debug)]
pub enum SessionStatus {
    Unknown,
    LoggedIn,
    LoggedOut,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub user: Option<User>,
    pub status: SessionStatus,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            status: SessionStatus::Unknown,
        }
    }
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.status == SessionStatus::LoggedIn
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin())
    }
}

pub enum SessionAction {
    /// Sesión restaurada desde cookies al arrancar
    Restore(User),
    /// Login explícito desde el formulario
    Login(User),
    /// Cierre de sesión o expiración
    Logout,
    /// No había sesión que restaurar
    RestoreFailed,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        match action {
            SessionAction::Restore(user) | SessionAction::Login(user) => Rc::new(Session {
                user: Some(user),
                status: SessionStatus::LoggedIn,
            }),
            SessionAction::Logout | SessionAction::RestoreFailed => Rc::new(Session {
                user: None,
                status: SessionStatus::LoggedOut,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserRole};

    fn user(role: UserRole) -> User {
        User {
            id: "u1".to_string(),
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            role,
            created_at: None,
        }
    }

    #[test]
    fn starts_unknown_without_user() {
        let session = Session::default();
        assert_eq!(session.status, SessionStatus::Unknown);
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
    }

    #[test]
    fn restore_logs_in() {
        let session = Rc::new(Session::default()).reduce(SessionAction::Restore(user(UserRole::User)));
        assert!(session.is_logged_in());
        assert_eq!(session.user.as_ref().map(|u| u.name.as_str()), Some("Ana"));
    }

    #[test]
    fn failed_restore_ends_logged_out() {
        let session = Rc::new(Session::default()).reduce(SessionAction::RestoreFailed);
        assert_eq!(session.status, SessionStatus::LoggedOut);
        assert!(session.user.is_none());
    }

    #[test]
    fn logout_clears_user() {
        let logged = Rc::new(Session::default()).reduce(SessionAction::Login(user(UserRole::Admin)));
        assert!(logged.is_admin());

        let out = logged.reduce(SessionAction::Logout);
        assert_eq!(out.status, SessionStatus::LoggedOut);
        assert!(out.user.is_none());
        assert!(!out.is_admin());
    }
}
