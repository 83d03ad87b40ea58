//! Controlador de Clientes

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::models::cliente::{ClienteResponse, CreateClienteRequest, UpdateClienteRequest};
use crate::repositories::cliente_repository::ClienteRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_email, normalize_name, validate_not_empty};

pub struct ClienteController {
    repository: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateClienteRequest,
        id_usuario_creacion: Uuid,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if validate_not_empty(&request.nombre).is_err() {
            return Err(AppError::Validation(
                "El nombre del cliente es obligatorio".to_string(),
            ));
        }

        let email = normalize_email(&request.email);

        if self.repository.email_exists(&email, None).await? {
            return Err(AppError::Validation(
                "Ya existe un cliente con ese correo".to_string(),
            ));
        }

        let cliente = self
            .repository
            .create(
                normalize_name(&request.nombre),
                email,
                request.telefono.map(|t| t.trim().to_string()),
                request.activo.unwrap_or(true),
                id_usuario_creacion,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cliente.into(),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ClienteResponse, AppError> {
        let cliente = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(cliente.into())
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<ClienteResponse>, AppError> {
        let clientes = self.repository.list(skip, limit).await?;
        Ok(clientes.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        request: UpdateClienteRequest,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let nombre = match request.nombre {
            Some(nombre) => {
                if validate_not_empty(&nombre).is_err() {
                    return Err(AppError::Validation(
                        "El nombre del cliente es obligatorio".to_string(),
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
                    "Ya existe un cliente con ese correo".to_string(),
                ));
            }
        }

        let telefono = request
            .telefono
            .map(|t| t.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()));

        let cliente = self
            .repository
            .update(id, id_usuario_edicion, nombre, email, telefono, request.activo)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            cliente.into(),
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        Ok(ApiResponse::message(
            "Cliente eliminado exitosamente".to_string(),
        ))
    }
}
