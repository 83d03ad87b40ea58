//! Controlador de Vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::models::vehiculo::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoResponse};
use crate::repositories::tipo_vehiculo_repository::TipoVehiculoRepository;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_name, normalize_placa, validate_not_empty};

pub struct VehiculoController {
    repository: VehiculoRepository,
    tipo_repository: TipoVehiculoRepository,
}

impl VehiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehiculoRepository::new(pool.clone()),
            tipo_repository: TipoVehiculoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehiculoRequest,
        id_usuario_creacion: Uuid,
    ) -> Result<ApiResponse<VehiculoResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if validate_not_empty(&request.marca).is_err() {
            return Err(AppError::Validation(
                "La marca del vehículo es obligatoria".to_string(),
            ));
        }
        if validate_not_empty(&request.modelo).is_err() {
            return Err(AppError::Validation(
                "El modelo del vehículo es obligatorio".to_string(),
            ));
        }

        if self
            .tipo_repository
            .find_by_id(request.tipo_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation(
                "El tipo de vehículo no existe".to_string(),
            ));
        }

        let placa = request.placa.map(|p| normalize_placa(&p));
        if let Some(ref placa) = placa {
            if self.repository.placa_exists(placa, None).await? {
                return Err(AppError::Validation(
                    "Ya existe un vehículo con esa placa".to_string(),
                ));
            }
        }

        let vehiculo = self
            .repository
            .create(
                request.tipo_id,
                normalize_name(&request.marca),
                normalize_name(&request.modelo),
                placa,
                request.disponible.unwrap_or(true),
                id_usuario_creacion,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehiculo.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehiculoResponse, AppError> {
        let vehiculo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehiculo.into())
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<VehiculoResponse>, AppError> {
        let vehiculos = self.repository.list(skip, limit).await?;
        Ok(vehiculos.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        request: UpdateVehiculoRequest,
    ) -> Result<ApiResponse<VehiculoResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let marca = match request.marca {
            Some(marca) => {
                if validate_not_empty(&marca).is_err() {
                    return Err(AppError::Validation(
                        "La marca del vehículo es obligatoria".to_string(),
                    ));
                }
                Some(normalize_name(&marca))
            }
            None => None,
        };

        let modelo = match request.modelo {
            Some(modelo) => {
                if validate_not_empty(&modelo).is_err() {
                    return Err(AppError::Validation(
                        "El modelo del vehículo es obligatorio".to_string(),
                    ));
                }
                Some(normalize_name(&modelo))
            }
            None => None,
        };

        if let Some(tipo_id) = request.tipo_id {
            if self.tipo_repository.find_by_id(tipo_id).await?.is_none() {
                return Err(AppError::Validation(
                    "El tipo de vehículo no existe".to_string(),
                ));
            }
        }

        let placa = request
            .placa
            .map(|p| p.map(|p| normalize_placa(&p)).filter(|p| !p.is_empty()));
        if let Some(Some(ref placa)) = placa {
            if self.repository.placa_exists(placa, Some(id)).await? {
                return Err(AppError::Validation(
                    "Ya existe un vehículo con esa placa".to_string(),
                ));
            }
        }

        let vehiculo = self
            .repository
            .update(
                id,
                id_usuario_edicion,
                request.tipo_id,
                marca,
                modelo,
                placa,
                request.disponible,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            vehiculo.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(ApiResponse::message(
            "Vehículo eliminado exitosamente".to_string(),
        ))
    }
}
