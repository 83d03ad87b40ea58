//! Controlador de autenticación
//!
//! Verifica credenciales contra la tabla usuarios y emite el bearer token.

use bcrypt::verify;
use sqlx::PgPool;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UsuarioRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let usuario = self
            .repository
            .find_by_username(request.username.trim())
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Credenciales inválidas o usuario inactivo".to_string())
            })?;

        if !usuario.estado {
            return Err(AppError::Unauthorized(
                "Credenciales inválidas o usuario inactivo".to_string(),
            ));
        }

        let valid = verify(&request.password, &usuario.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando contraseña: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized(
                "Credenciales inválidas o usuario inactivo".to_string(),
            ));
        }

        let token = generate_token(usuario.id, &usuario.username, &self.jwt_config)?;

        tracing::debug!("Usuario autenticado: {}", usuario.id);

        Ok(LoginResponse::new(
            token,
            usuario.id.to_string(),
            usuario.username,
        ))
    }
}
