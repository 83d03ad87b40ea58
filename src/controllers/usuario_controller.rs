//! Controlador de Usuarios
//!
//! La contraseña se hashea aquí con bcrypt; el hash nunca sale en las
//! respuestas de la API.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::models::usuario::{
    CambiarPasswordRequest, CreateUsuarioRequest, UpdateUsuarioRequest, UsuarioResponse,
};
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::utils::errors::AppError;

pub struct UsuarioController {
    repository: UsuarioRepository,
}

impl UsuarioController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateUsuarioRequest,
        id_usuario_creacion: Option<Uuid>,
    ) -> Result<ApiResponse<UsuarioResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let username = request.username.trim().to_string();

        if self.repository.username_exists(&username, None).await? {
            return Err(AppError::Validation(
                "El nombre de usuario ya existe".to_string(),
            ));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let usuario = self
            .repository
            .create(
                username,
                password_hash,
                request.rol.unwrap_or_else(|| "admin".to_string()),
                id_usuario_creacion,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            usuario.into(),
            "Usuario creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UsuarioResponse, AppError> {
        let usuario = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(usuario.into())
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UsuarioResponse>, AppError> {
        let usuarios = self.repository.list(skip, limit).await?;
        Ok(usuarios.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        request: UpdateUsuarioRequest,
    ) -> Result<ApiResponse<UsuarioResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let username = request.username.map(|u| u.trim().to_string());
        if let Some(ref username) = username {
            if self.repository.username_exists(username, Some(id)).await? {
                return Err(AppError::Validation(
                    "El nombre de usuario ya existe".to_string(),
                ));
            }
        }

        let password_hash = match request.password {
            Some(password) => Some(
                hash(&password, DEFAULT_COST)
                    .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?,
            ),
            None => None,
        };

        let usuario = self
            .repository
            .update(
                id,
                id_usuario_edicion,
                username,
                password_hash,
                request.rol,
                request.estado,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            usuario.into(),
            "Usuario actualizado exitosamente".to_string(),
        ))
    }

    pub async fn cambiar_password(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        request: CambiarPasswordRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let usuario = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let valid = verify(&request.current_password, &usuario.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando contraseña: {}", e)))?;

        if !valid {
            return Err(AppError::Validation(
                "Contraseña actual incorrecta".to_string(),
            ));
        }

        let password_hash = hash(&request.new_password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        self.repository
            .update(id, id_usuario_edicion, None, Some(password_hash), None, None)
            .await?;

        Ok(ApiResponse::message(
            "Contraseña actualizada correctamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(ApiResponse::message(
            "Usuario eliminado exitosamente".to_string(),
        ))
    }
}
