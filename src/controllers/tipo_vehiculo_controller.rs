//! Controlador de Tipos de Vehículo

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::models::tipo_vehiculo::{
    CreateTipoVehiculoRequest, TipoVehiculoResponse, UpdateTipoVehiculoRequest,
};
use crate::repositories::tipo_vehiculo_repository::TipoVehiculoRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_name, validate_not_empty};

pub struct TipoVehiculoController {
    repository: TipoVehiculoRepository,
}

impl TipoVehiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TipoVehiculoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTipoVehiculoRequest,
        id_usuario_creacion: Uuid,
    ) -> Result<ApiResponse<TipoVehiculoResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if validate_not_empty(&request.nombre).is_err() {
            return Err(AppError::Validation(
                "El nombre del tipo de vehículo es obligatorio".to_string(),
            ));
        }

        let nombre = normalize_name(&request.nombre);

        if self.repository.nombre_exists(&nombre, None).await? {
            return Err(AppError::Validation(
                "Ya existe un tipo de vehículo con ese nombre".to_string(),
            ));
        }

        let tipo = self
            .repository
            .create(
                nombre,
                request
                    .descripcion
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty()),
                request.activo.unwrap_or(true),
                id_usuario_creacion,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            tipo.into(),
            "Tipo de vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TipoVehiculoResponse, AppError> {
        let tipo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de vehículo no encontrado".to_string()))?;

        Ok(tipo.into())
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<TipoVehiculoResponse>, AppError> {
        let tipos = self.repository.list(skip, limit).await?;
        Ok(tipos.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        request: UpdateTipoVehiculoRequest,
    ) -> Result<ApiResponse<TipoVehiculoResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let nombre = match request.nombre {
            Some(nombre) => {
                if validate_not_empty(&nombre).is_err() {
                    return Err(AppError::Validation(
                        "El nombre del tipo de vehículo es obligatorio".to_string(),
                    ));
                }
                let nombre = normalize_name(&nombre);
                if self.repository.nombre_exists(&nombre, Some(id)).await? {
                    return Err(AppError::Validation(
                        "Ya existe un tipo de vehículo con ese nombre".to_string(),
                    ));
                }
                Some(nombre)
            }
            None => None,
        };

        let descripcion = request
            .descripcion
            .map(|d| d.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()));

        let tipo = self
            .repository
            .update(id, id_usuario_edicion, nombre, descripcion, request.activo)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            tipo.into(),
            "Tipo de vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(
                "Tipo de vehículo no encontrado".to_string(),
            ));
        }

        Ok(ApiResponse::message(
            "Tipo de vehículo eliminado exitosamente".to_string(),
        ))
    }
}
