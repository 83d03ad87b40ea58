use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::empleado::Empleado;
use crate::utils::errors::AppError;

pub struct EmpleadoRepository {
    pool: PgPool,
}

impl EmpleadoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        email: String,
        rol: String,
        activo: bool,
        id_usuario_creacion: Uuid,
    ) -> Result<Empleado, AppError> {
        let empleado = sqlx::query_as::<_, Empleado>(
            r#"
            INSERT INTO empleados (id, nombre, email, rol, activo, id_usuario_creacion, fecha_creacion)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(email)
        .bind(rol)
        .bind(activo)
        .bind(id_usuario_creacion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(empleado)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Empleado>, AppError> {
        let empleado = sqlx::query_as::<_, Empleado>("SELECT * FROM empleados WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(empleado)
    }

    pub async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM empleados WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Empleado>, AppError> {
        let empleados = sqlx::query_as::<_, Empleado>(
            "SELECT * FROM empleados ORDER BY fecha_creacion DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(empleados)
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        nombre: Option<String>,
        email: Option<String>,
        rol: Option<String>,
        activo: Option<bool>,
    ) -> Result<Option<Empleado>, AppError> {
        let current = match self.find_by_id(id).await? {
            Some(e) => e,
            None => return Ok(None),
        };

        let empleado = sqlx::query_as::<_, Empleado>(
            r#"
            UPDATE empleados
            SET nombre = $2, email = $3, rol = $4, activo = $5,
                id_usuario_edicion = $6, fecha_actualizacion = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(email.unwrap_or(current.email))
        .bind(rol.unwrap_or(current.rol))
        .bind(activo.unwrap_or(current.activo))
        .bind(id_usuario_edicion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(empleado))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM empleados WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
