//! Modelo de Pago

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Pago - mapea a la tabla pagos
#[derive(Debug, Clone, FromRow)]
pub struct Pago {
    pub id: Uuid,
    pub contrato_id: Uuid,
    pub monto: Decimal,
    pub fecha_pago: DateTime<Utc>,
    pub id_usuario_creacion: Uuid,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo pago
#[derive(Debug, Deserialize)]
pub struct CreatePagoRequest {
    pub contrato_id: Uuid,
    pub monto: Decimal,
    /// Fecha del pago; si se omite se usa la fecha actual
    pub fecha_pago: Option<DateTime<Utc>>,
}

/// Request para actualizar un pago existente
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePagoRequest {
    pub monto: Option<Decimal>,
    pub fecha_pago: Option<DateTime<Utc>>,
}

/// Response de pago para la API
#[derive(Debug, Serialize)]
pub struct PagoResponse {
    pub id: Uuid,
    pub contrato_id: Uuid,
    pub monto: Decimal,
    pub fecha_pago: DateTime<Utc>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl From<Pago> for PagoResponse {
    fn from(pago: Pago) -> Self {
        Self {
            id: pago.id,
            contrato_id: pago.contrato_id,
            monto: pago.monto,
            fecha_pago: pago.fecha_pago,
            fecha_creacion: pago.fecha_creacion,
            fecha_actualizacion: pago.fecha_actualizacion,
        }
    }
}
