use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cliente::Cliente;
use crate::utils::errors::AppError;

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        email: String,
        telefono: Option<String>,
        activo: bool,
        id_usuario_creacion: Uuid,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (id, nombre, email, telefono, activo, id_usuario_creacion, fecha_creacion)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .bind(activo)
        .bind(id_usuario_creacion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM clientes WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes ORDER BY fecha_creacion DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        nombre: Option<String>,
        email: Option<String>,
        telefono: Option<Option<String>>,
        activo: Option<bool>,
    ) -> Result<Option<Cliente>, AppError> {
        let current = match self.find_by_id(id).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nombre = $2, email = $3, telefono = $4, activo = $5,
                id_usuario_edicion = $6, fecha_actualizacion = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(email.unwrap_or(current.email))
        .bind(telefono.unwrap_or(current.telefono))
        .bind(activo.unwrap_or(current.activo))
        .bind(id_usuario_edicion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(cliente))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
