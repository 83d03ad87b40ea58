//! Modelo de Vehiculo
//!
//! Este módulo contiene el struct Vehiculo y sus variantes para CRUD
//! operations. El flag `disponible` lo coordina el módulo de contratos:
//! crear un contrato lo apaga, desactivar o eliminar el contrato lo restaura.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Vehiculo - mapea a la tabla vehiculos
#[derive(Debug, Clone, FromRow)]
pub struct Vehiculo {
    pub id: Uuid,
    pub tipo_id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub placa: Option<String>,
    pub disponible: bool,
    pub id_usuario_creacion: Uuid,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehiculoRequest {
    pub tipo_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub marca: String,

    #[validate(length(min = 1, max = 100))]
    pub modelo: String,

    #[validate(length(min = 2, max = 20))]
    pub placa: Option<String>,

    pub disponible: Option<bool>,
}

/// Request para actualizar un vehículo existente
///
/// `placa` usa doble Option: ausente = sin cambios, null = quitar placa.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehiculoRequest {
    pub tipo_id: Option<Uuid>,

    #[validate(length(min = 1, max = 100))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: Option<String>,

    #[serde(default, deserialize_with = "crate::utils::serde_helpers::double_option")]
    pub placa: Option<Option<String>>,

    pub disponible: Option<bool>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehiculoResponse {
    pub id: Uuid,
    pub tipo_id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub placa: Option<String>,
    pub disponible: bool,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl From<Vehiculo> for VehiculoResponse {
    fn from(vehiculo: Vehiculo) -> Self {
        Self {
            id: vehiculo.id,
            tipo_id: vehiculo.tipo_id,
            marca: vehiculo.marca,
            modelo: vehiculo.modelo,
            placa: vehiculo.placa,
            disponible: vehiculo.disponible,
            fecha_creacion: vehiculo.fecha_creacion,
            fecha_actualizacion: vehiculo.fecha_actualizacion,
        }
    }
}
