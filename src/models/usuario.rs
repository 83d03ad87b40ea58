//! Modelo de Usuario
//!
//! Usuarios del sistema con credenciales de acceso, rol y estado,
//! además de la trazabilidad de su creación y edición.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Usuario - mapea a la tabla usuarios
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub rol: String,
    pub estado: bool,
    pub id_usuario_creacion: Option<Uuid>,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo usuario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUsuarioRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    pub rol: Option<String>,
}

/// Request para actualizar un usuario existente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUsuarioRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: Option<String>,

    #[validate(length(min = 6, max = 128))]
    pub password: Option<String>,

    pub rol: Option<String>,
    pub estado: Option<bool>,
}

/// Request para cambiar la contraseña de un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct CambiarPasswordRequest {
    pub current_password: String,

    #[validate(length(min = 6, max = 128))]
    pub new_password: String,
}

/// Response de usuario para la API (sin password_hash)
#[derive(Debug, Serialize)]
pub struct UsuarioResponse {
    pub id: Uuid,
    pub username: String,
    pub rol: String,
    pub estado: bool,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            username: usuario.username,
            rol: usuario.rol,
            estado: usuario.estado,
            fecha_creacion: usuario.fecha_creacion,
            fecha_actualizacion: usuario.fecha_actualizacion,
        }
    }
}
