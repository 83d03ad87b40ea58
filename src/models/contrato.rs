//! Modelo de Contrato
//!
//! Un contrato vincula cliente, vehículo y empleado sobre un rango de
//! fechas. Invariante: `fecha_fin`, si está definida, nunca es anterior a
//! `fecha_inicio`, ni al crear ni después de aplicar un patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Contrato - mapea a la tabla contratos
#[derive(Debug, Clone, FromRow)]
pub struct Contrato {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub vehiculo_id: Uuid,
    pub empleado_id: Uuid,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: Option<DateTime<Utc>>,
    pub activo: bool,
    pub id_usuario_creacion: Uuid,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo contrato
#[derive(Debug, Deserialize)]
pub struct CreateContratoRequest {
    pub cliente_id: Uuid,
    pub vehiculo_id: Uuid,
    pub empleado_id: Uuid,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: Option<DateTime<Utc>>,
}

/// Request para actualizar un contrato existente
///
/// `fecha_fin` usa doble Option: ausente = sin cambios, null explícito =
/// contrato sin fecha de fin.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateContratoRequest {
    pub fecha_inicio: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "crate::utils::serde_helpers::double_option")]
    pub fecha_fin: Option<Option<DateTime<Utc>>>,

    pub activo: Option<bool>,
}

impl UpdateContratoRequest {
    /// Combinación de fechas resultante de aplicar este patch sobre el
    /// contrato almacenado, sin haberlo escrito todavía.
    pub fn fechas_resultantes(
        &self,
        actual: &Contrato,
    ) -> (DateTime<Utc>, Option<DateTime<Utc>>) {
        let inicio = self.fecha_inicio.unwrap_or(actual.fecha_inicio);
        let fin = match self.fecha_fin {
            Some(nuevo) => nuevo,
            None => actual.fecha_fin,
        };
        (inicio, fin)
    }
}

/// Validar el orden de fechas de un contrato
pub fn validar_fechas(
    fecha_inicio: DateTime<Utc>,
    fecha_fin: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let Some(fin) = fecha_fin {
        if fin < fecha_inicio {
            return Err(AppError::Validation(
                "La fecha de fin no puede ser anterior a la de inicio".to_string(),
            ));
        }
    }
    Ok(())
}

/// Response de contrato para la API
#[derive(Debug, Serialize)]
pub struct ContratoResponse {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub vehiculo_id: Uuid,
    pub empleado_id: Uuid,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: Option<DateTime<Utc>>,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl From<Contrato> for ContratoResponse {
    fn from(contrato: Contrato) -> Self {
        Self {
            id: contrato.id,
            cliente_id: contrato.cliente_id,
            vehiculo_id: contrato.vehiculo_id,
            empleado_id: contrato.empleado_id,
            fecha_inicio: contrato.fecha_inicio,
            fecha_fin: contrato.fecha_fin,
            activo: contrato.activo,
            fecha_creacion: contrato.fecha_creacion,
            fecha_actualizacion: contrato.fecha_actualizacion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fecha(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn contrato_base() -> Contrato {
        Contrato {
            id: Uuid::new_v4(),
            cliente_id: Uuid::new_v4(),
            vehiculo_id: Uuid::new_v4(),
            empleado_id: Uuid::new_v4(),
            fecha_inicio: fecha(2024, 1, 1),
            fecha_fin: Some(fecha(2024, 6, 1)),
            activo: true,
            id_usuario_creacion: Uuid::new_v4(),
            id_usuario_edicion: None,
            fecha_creacion: Utc::now(),
            fecha_actualizacion: None,
        }
    }

    #[test]
    fn test_validar_fechas_orden_correcto() {
        assert!(validar_fechas(fecha(2024, 3, 1), Some(fecha(2024, 3, 10))).is_ok());
        assert!(validar_fechas(fecha(2024, 3, 1), Some(fecha(2024, 3, 1))).is_ok());
        assert!(validar_fechas(fecha(2024, 3, 1), None).is_ok());
    }

    #[test]
    fn test_validar_fechas_fin_anterior_a_inicio() {
        assert!(validar_fechas(fecha(2024, 3, 10), Some(fecha(2024, 3, 1))).is_err());
    }

    #[test]
    fn test_fechas_resultantes_sin_cambios() {
        let contrato = contrato_base();
        let patch = UpdateContratoRequest::default();
        let (inicio, fin) = patch.fechas_resultantes(&contrato);
        assert_eq!(inicio, contrato.fecha_inicio);
        assert_eq!(fin, contrato.fecha_fin);
    }

    #[test]
    fn test_fechas_resultantes_nueva_fecha_fin() {
        let contrato = contrato_base();
        let patch = UpdateContratoRequest {
            fecha_fin: Some(Some(fecha(2024, 12, 1))),
            ..Default::default()
        };
        let (inicio, fin) = patch.fechas_resultantes(&contrato);
        assert_eq!(inicio, contrato.fecha_inicio);
        assert_eq!(fin, Some(fecha(2024, 12, 1)));
    }

    #[test]
    fn test_fechas_resultantes_quitar_fecha_fin() {
        let contrato = contrato_base();
        let patch: UpdateContratoRequest =
            serde_json::from_str(r#"{"fecha_fin": null}"#).unwrap();
        let (_, fin) = patch.fechas_resultantes(&contrato);
        assert_eq!(fin, None);
    }

    #[test]
    fn test_patch_invalido_detectado_antes_de_escribir() {
        // Actualizar fecha_fin a una fecha anterior a la fecha_inicio
        // almacenada debe fallar la validación con la combinación mezclada.
        let contrato = contrato_base();
        let patch = UpdateContratoRequest {
            fecha_fin: Some(Some(fecha(2023, 12, 1))),
            ..Default::default()
        };
        let (inicio, fin) = patch.fechas_resultantes(&contrato);
        assert!(validar_fechas(inicio, fin).is_err());
    }

    #[test]
    fn test_patch_mueve_inicio_despues_de_fin() {
        let contrato = contrato_base();
        let patch = UpdateContratoRequest {
            fecha_inicio: Some(fecha(2024, 7, 1)),
            ..Default::default()
        };
        let (inicio, fin) = patch.fechas_resultantes(&contrato);
        assert!(validar_fechas(inicio, fin).is_err());
    }
}
