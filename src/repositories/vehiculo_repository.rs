use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehiculo::Vehiculo;
use crate::utils::errors::AppError;

pub struct VehiculoRepository {
    pool: PgPool,
}

impl VehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tipo_id: Uuid,
        marca: String,
        modelo: String,
        placa: Option<String>,
        disponible: bool,
        id_usuario_creacion: Uuid,
    ) -> Result<Vehiculo, AppError> {
        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            INSERT INTO vehiculos (id, tipo_id, marca, modelo, placa, disponible, id_usuario_creacion, fecha_creacion)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tipo_id)
        .bind(marca)
        .bind(modelo)
        .bind(placa)
        .bind(disponible)
        .bind(id_usuario_creacion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehiculo>, AppError> {
        let vehiculo = sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehiculo)
    }

    pub async fn placa_exists(
        &self,
        placa: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehiculos WHERE placa = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(placa)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Vehiculo>, AppError> {
        let vehiculos = sqlx::query_as::<_, Vehiculo>(
            "SELECT * FROM vehiculos ORDER BY fecha_creacion DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehiculos)
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        tipo_id: Option<Uuid>,
        marca: Option<String>,
        modelo: Option<String>,
        placa: Option<Option<String>>,
        disponible: Option<bool>,
    ) -> Result<Option<Vehiculo>, AppError> {
        let current = match self.find_by_id(id).await? {
            Some(v) => v,
            None => return Ok(None),
        };

        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            UPDATE vehiculos
            SET tipo_id = $2, marca = $3, modelo = $4, placa = $5, disponible = $6,
                id_usuario_edicion = $7, fecha_actualizacion = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(tipo_id.unwrap_or(current.tipo_id))
        .bind(marca.unwrap_or(current.marca))
        .bind(modelo.unwrap_or(current.modelo))
        .bind(placa.unwrap_or(current.placa))
        .bind(disponible.unwrap_or(current.disponible))
        .bind(id_usuario_edicion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(vehiculo))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehiculos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
