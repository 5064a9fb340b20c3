use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Cuerpo de error genérico del backend
/// (acaba como redirección a /error con message + code)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<u16>,
}
