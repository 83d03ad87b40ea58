//! Controlador de Empleados

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::models::empleado::{CreateEmpleadoRequest, EmpleadoResponse, UpdateEmpleadoRequest};
use crate::repositories::empleado_repository::EmpleadoRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_email, normalize_name, validate_not_empty};

pub struct EmpleadoController {
    repository: EmpleadoRepository,
}

impl EmpleadoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmpleadoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateEmpleadoRequest,
        id_usuario_creacion: Uuid,
    ) -> Result<ApiResponse<EmpleadoResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if validate_not_empty(&request.nombre).is_err() {
            return Err(AppError::Validation(
                "El nombre del empleado es obligatorio".to_string(),
            ));
        }

        let email = normalize_email(&request.email);

        if self.repository.email_exists(&email, None).await? {
            return Err(AppError::Validation(
                "Ya existe un empleado con ese correo".to_string(),
            ));
        }

        let rol = normalize_name(request.rol.as_deref().unwrap_or("Asesor"));

        let empleado = self
            .repository
            .create(
                normalize_name(&request.nombre),
                email,
                rol,
                request.activo.unwrap_or(true),
                id_usuario_creacion,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            empleado.into(),
            "Empleado creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<EmpleadoResponse, AppError> {
        let empleado = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empleado no encontrado".to_string()))?;

        Ok(empleado.into())
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<EmpleadoResponse>, AppError> {
        let empleados = self.repository.list(skip, limit).await?;
        Ok(empleados.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        request: UpdateEmpleadoRequest,
    ) -> Result<ApiResponse<EmpleadoResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let nombre = match request.nombre {
            Some(nombre) => {
                if validate_not_empty(&nombre).is_err() {
                    return Err(AppError::Validation(
                        "El nombre del empleado es obligatorio".to_string(),
                    ));
                }
                Some(normalize_name(&nombre))
            }
            None => None,
        };

        let email = request.email.map(|e| normalize_email(&e));
        if let Some(ref email) = email {
            if self.repository.email_exists(email, Some(id)).await? {
                return Err(AppError::Validation(
                    "Ya existe un empleado con ese correo".to_string(),
                ));
            }
        }

        let rol = request.rol.map(|r| normalize_name(&r));

        let empleado = self
            .repository
            .update(id, id_usuario_edicion, nombre, email, rol, request.activo)
            .await?
            .ok_or_else(|| AppError::NotFound("Empleado no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            empleado.into(),
            "Empleado actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Empleado no encontrado".to_string()));
        }

        Ok(ApiResponse::message(
            "Empleado eliminado exitosamente".to_string(),
        ))
    }
}
