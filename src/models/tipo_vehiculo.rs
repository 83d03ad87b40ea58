//! Modelo de TipoVehiculo
//!
//! El tipo de vehículo es un dato referenciado por FK desde vehiculos,
//! no una jerarquía de clases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// TipoVehiculo - mapea a la tabla tipos_vehiculo
#[derive(Debug, Clone, FromRow)]
pub struct TipoVehiculo {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub id_usuario_creacion: Uuid,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo tipo de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTipoVehiculoRequest {
    #[validate(length(min = 2, max = 100))]
    pub nombre: String,

    pub descripcion: Option<String>,

    pub activo: Option<bool>,
}

/// Request para actualizar un tipo de vehículo existente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTipoVehiculoRequest {
    #[validate(length(min = 2, max = 100))]
    pub nombre: Option<String>,

    #[serde(default, deserialize_with = "crate::utils::serde_helpers::double_option")]
    pub descripcion: Option<Option<String>>,

    pub activo: Option<bool>,
}

/// Response de tipo de vehículo para la API
#[derive(Debug, Serialize)]
pub struct TipoVehiculoResponse {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl From<TipoVehiculo> for TipoVehiculoResponse {
    fn from(tipo: TipoVehiculo) -> Self {
        Self {
            id: tipo.id,
            nombre: tipo.nombre,
            descripcion: tipo.descripcion,
            activo: tipo.activo,
            fecha_creacion: tipo.fecha_creacion,
            fecha_actualizacion: tipo.fecha_actualizacion,
        }
    }
}
