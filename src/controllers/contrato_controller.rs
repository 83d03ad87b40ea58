//! Controlador de Contratos

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::models::contrato::{ContratoResponse, CreateContratoRequest, UpdateContratoRequest};
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::contrato_repository::ContratoRepository;
use crate::repositories::empleado_repository::EmpleadoRepository;
use crate::utils::errors::AppError;

pub struct ContratoController {
    repository: ContratoRepository,
    cliente_repository: ClienteRepository,
    empleado_repository: EmpleadoRepository,
}

impl ContratoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ContratoRepository::new(pool.clone()),
            cliente_repository: ClienteRepository::new(pool.clone()),
            empleado_repository: EmpleadoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateContratoRequest,
        id_usuario_creacion: Uuid,
    ) -> Result<ApiResponse<ContratoResponse>, AppError> {
        if self
            .cliente_repository
            .find_by_id(request.cliente_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation("El cliente no existe".to_string()));
        }

        if self
            .empleado_repository
            .find_by_id(request.empleado_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation("El empleado no existe".to_string()));
        }

        let contrato = self
            .repository
            .create(
                request.cliente_id,
                request.vehiculo_id,
                request.empleado_id,
                request.fecha_inicio,
                request.fecha_fin,
                id_usuario_creacion,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            contrato.into(),
            "Contrato creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ContratoResponse, AppError> {
        let contrato = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contrato no encontrado".to_string()))?;

        Ok(contrato.into())
    }

    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        solo_activos: bool,
    ) -> Result<Vec<ContratoResponse>, AppError> {
        let contratos = self.repository.list(skip, limit, solo_activos).await?;
        Ok(contratos.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        request: UpdateContratoRequest,
    ) -> Result<ApiResponse<ContratoResponse>, AppError> {
        let contrato = self
            .repository
            .update(id, id_usuario_edicion, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("Contrato no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            contrato.into(),
            "Contrato actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
    ) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.delete(id, id_usuario_edicion).await? {
            return Err(AppError::NotFound("Contrato no encontrado".to_string()));
        }

        Ok(ApiResponse::message(
            "Contrato eliminado exitosamente".to_string(),
        ))
    }
}
