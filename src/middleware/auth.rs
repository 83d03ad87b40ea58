//! Middleware de autenticación JWT
//!
//! Este módulo expone el extractor `AuthenticatedUser`, que valida el
//! bearer token de la request y verifica que el usuario siga existiendo
//! y esté activo antes de dejar pasar la petición.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::{
    repositories::usuario_repository::UsuarioRepository,
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token},
    },
};

/// Usuario autenticado extraído del token de la request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub usuario_id: Uuid,
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized("Token de autorización requerido".to_string())
            })?;

        let token = extract_token_from_header(auth_header)
            .map_err(|_| AppError::Unauthorized("Token de autorización inválido".to_string()))?;

        let claims = verify_token(token, &state.jwt_config())
            .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

        let usuario_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

        let usuario = UsuarioRepository::new(state.pool.clone())
            .find_by_id(usuario_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

        if !usuario.estado {
            return Err(AppError::Unauthorized("Usuario inactivo".to_string()));
        }

        Ok(AuthenticatedUser {
            usuario_id: usuario.id,
            username: usuario.username,
        })
    }
}
