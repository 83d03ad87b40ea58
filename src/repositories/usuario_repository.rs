use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::usuario::Usuario;
use crate::utils::errors::AppError;

pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        rol: String,
        id_usuario_creacion: Option<Uuid>,
    ) -> Result<Usuario, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (id, username, password_hash, rol, estado, id_usuario_creacion, fecha_creacion)
            VALUES ($1, $2, $3, $4, TRUE, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .bind(rol)
        .bind(id_usuario_creacion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(usuario)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    pub async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM usuarios WHERE username = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(username)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Usuario>, AppError> {
        let usuarios = sqlx::query_as::<_, Usuario>(
            "SELECT * FROM usuarios ORDER BY fecha_creacion DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(usuarios)
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        username: Option<String>,
        password_hash: Option<String>,
        rol: Option<String>,
        estado: Option<bool>,
    ) -> Result<Option<Usuario>, AppError> {
        let current = match self.find_by_id(id).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            UPDATE usuarios
            SET username = $2, password_hash = $3, rol = $4, estado = $5,
                id_usuario_edicion = $6, fecha_actualizacion = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(username.unwrap_or(current.username))
        .bind(password_hash.unwrap_or(current.password_hash))
        .bind(rol.unwrap_or(current.rol))
        .bind(estado.unwrap_or(current.estado))
        .bind(id_usuario_edicion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(usuario))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
