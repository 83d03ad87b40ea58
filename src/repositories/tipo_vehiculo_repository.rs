use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tipo_vehiculo::TipoVehiculo;
use crate::utils::errors::AppError;

pub struct TipoVehiculoRepository {
    pool: PgPool,
}

impl TipoVehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        descripcion: Option<String>,
        activo: bool,
        id_usuario_creacion: Uuid,
    ) -> Result<TipoVehiculo, AppError> {
        let tipo = sqlx::query_as::<_, TipoVehiculo>(
            r#"
            INSERT INTO tipos_vehiculo (id, nombre, descripcion, activo, id_usuario_creacion, fecha_creacion)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(descripcion)
        .bind(activo)
        .bind(id_usuario_creacion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(tipo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TipoVehiculo>, AppError> {
        let tipo = sqlx::query_as::<_, TipoVehiculo>("SELECT * FROM tipos_vehiculo WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tipo)
    }

    pub async fn nombre_exists(
        &self,
        nombre: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM tipos_vehiculo WHERE nombre = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(nombre)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<TipoVehiculo>, AppError> {
        let tipos = sqlx::query_as::<_, TipoVehiculo>(
            "SELECT * FROM tipos_vehiculo ORDER BY fecha_creacion DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(tipos)
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        nombre: Option<String>,
        descripcion: Option<Option<String>>,
        activo: Option<bool>,
    ) -> Result<Option<TipoVehiculo>, AppError> {
        let current = match self.find_by_id(id).await? {
            Some(t) => t,
            None => return Ok(None),
        };

        let tipo = sqlx::query_as::<_, TipoVehiculo>(
            r#"
            UPDATE tipos_vehiculo
            SET nombre = $2, descripcion = $3, activo = $4,
                id_usuario_edicion = $5, fecha_actualizacion = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(descripcion.unwrap_or(current.descripcion))
        .bind(activo.unwrap_or(current.activo))
        .bind(id_usuario_edicion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(tipo))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tipos_vehiculo WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
