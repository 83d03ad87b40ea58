//! Modelo de Empleado

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Empleado - mapea a la tabla empleados
#[derive(Debug, Clone, FromRow)]
pub struct Empleado {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub activo: bool,
    pub id_usuario_creacion: Uuid,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo empleado
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmpleadoRequest {
    #[validate(length(min = 1, max = 150))]
    pub nombre: String,

    #[validate(email)]
    pub email: String,

    /// Rol del empleado (default "Asesor")
    #[validate(length(min = 1, max = 50))]
    pub rol: Option<String>,

    pub activo: Option<bool>,
}

/// Request para actualizar un empleado existente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateEmpleadoRequest {
    #[validate(length(min = 1, max = 150))]
    pub nombre: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub rol: Option<String>,

    pub activo: Option<bool>,
}

/// Response de empleado para la API
#[derive(Debug, Serialize)]
pub struct EmpleadoResponse {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl From<Empleado> for EmpleadoResponse {
    fn from(empleado: Empleado) -> Self {
        Self {
            id: empleado.id,
            nombre: empleado.nombre,
            email: empleado.email,
            rol: empleado.rol,
            activo: empleado.activo,
            fecha_creacion: empleado.fecha_creacion,
            fecha_actualizacion: empleado.fecha_actualizacion,
        }
    }
}
