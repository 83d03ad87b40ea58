//! Controlador de Pagos

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::models::pago::{CreatePagoRequest, PagoResponse, UpdatePagoRequest};
use crate::repositories::contrato_repository::ContratoRepository;
use crate::repositories::pago_repository::PagoRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_positive;

pub struct PagoController {
    repository: PagoRepository,
    contrato_repository: ContratoRepository,
}

impl PagoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PagoRepository::new(pool.clone()),
            contrato_repository: ContratoRepository::new(pool),
        }
    }

    fn validar_monto(monto: Decimal) -> Result<(), AppError> {
        validate_positive(monto).map_err(|_| {
            AppError::Validation("El monto del pago debe ser mayor que 0".to_string())
        })
    }

    pub async fn create(
        &self,
        request: CreatePagoRequest,
        id_usuario_creacion: Uuid,
    ) -> Result<ApiResponse<PagoResponse>, AppError> {
        Self::validar_monto(request.monto)?;

        if self
            .contrato_repository
            .find_by_id(request.contrato_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation("El contrato no existe".to_string()));
        }

        let pago = self
            .repository
            .create(
                request.contrato_id,
                request.monto,
                request.fecha_pago.unwrap_or_else(Utc::now),
                id_usuario_creacion,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            pago.into(),
            "Pago registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PagoResponse, AppError> {
        let pago = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pago no encontrado".to_string()))?;

        Ok(pago.into())
    }

    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        contrato_id: Option<Uuid>,
    ) -> Result<Vec<PagoResponse>, AppError> {
        let pagos = self.repository.list(skip, limit, contrato_id).await?;
        Ok(pagos.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        request: UpdatePagoRequest,
    ) -> Result<ApiResponse<PagoResponse>, AppError> {
        if let Some(monto) = request.monto {
            Self::validar_monto(monto)?;
        }

        let pago = self
            .repository
            .update(id, id_usuario_edicion, request.monto, request.fecha_pago)
            .await?
            .ok_or_else(|| AppError::NotFound("Pago no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            pago.into(),
            "Pago actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Pago no encontrado".to_string()));
        }

        Ok(ApiResponse::message(
            "Pago eliminado exitosamente".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monto_cero_rechazado() {
        assert!(PagoController::validar_monto(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_monto_negativo_rechazado() {
        assert!(PagoController::validar_monto(Decimal::new(-100, 2)).is_err());
    }

    #[test]
    fn test_monto_positivo_aceptado() {
        assert!(PagoController::validar_monto(Decimal::new(15050, 2)).is_ok());
    }
}
