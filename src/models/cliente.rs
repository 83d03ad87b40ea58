//! Modelo de Cliente

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Cliente - mapea a la tabla clientes
#[derive(Debug, Clone, FromRow)]
pub struct Cliente {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub activo: bool,
    pub id_usuario_creacion: Uuid,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClienteRequest {
    #[validate(length(min = 1, max = 150))]
    pub nombre: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 20))]
    pub telefono: Option<String>,

    pub activo: Option<bool>,
}

/// Request para actualizar un cliente existente
///
/// `telefono` distingue "no enviado" (campo ausente) de "limpiar" (null
/// explícito) mediante el doble Option.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateClienteRequest {
    #[validate(length(min = 1, max = 150))]
    pub nombre: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "crate::utils::serde_helpers::double_option")]
    pub telefono: Option<Option<String>>,

    pub activo: Option<bool>,
}

/// Response de cliente para la API
#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl From<Cliente> for ClienteResponse {
    fn from(cliente: Cliente) -> Self {
        Self {
            id: cliente.id,
            nombre: cliente.nombre,
            email: cliente.email,
            telefono: cliente.telefono,
            activo: cliente.activo,
            fecha_creacion: cliente.fecha_creacion,
            fecha_actualizacion: cliente.fecha_actualizacion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_distingue_ausente_de_null() {
        // Campo ausente: no tocar telefono
        let req: UpdateClienteRequest = serde_json::from_str(r#"{"nombre": "Ana"}"#).unwrap();
        assert!(req.telefono.is_none());

        // Null explícito: limpiar telefono
        let req: UpdateClienteRequest = serde_json::from_str(r#"{"telefono": null}"#).unwrap();
        assert_eq!(req.telefono, Some(None));

        // Valor: reemplazar telefono
        let req: UpdateClienteRequest =
            serde_json::from_str(r#"{"telefono": "3001234567"}"#).unwrap();
        assert_eq!(req.telefono, Some(Some("3001234567".to_string())));
    }
}
