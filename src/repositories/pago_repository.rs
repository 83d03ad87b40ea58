use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::pago::Pago;
use crate::utils::errors::AppError;

pub struct PagoRepository {
    pool: PgPool,
}

impl PagoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        contrato_id: Uuid,
        monto: Decimal,
        fecha_pago: DateTime<Utc>,
        id_usuario_creacion: Uuid,
    ) -> Result<Pago, AppError> {
        let pago = sqlx::query_as::<_, Pago>(
            r#"
            INSERT INTO pagos (id, contrato_id, monto, fecha_pago, id_usuario_creacion, fecha_creacion)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(contrato_id)
        .bind(monto)
        .bind(fecha_pago)
        .bind(id_usuario_creacion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(pago)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Pago>, AppError> {
        let pago = sqlx::query_as::<_, Pago>("SELECT * FROM pagos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pago)
    }

    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        contrato_id: Option<Uuid>,
    ) -> Result<Vec<Pago>, AppError> {
        let pagos = sqlx::query_as::<_, Pago>(
            r#"
            SELECT * FROM pagos
            WHERE ($3::uuid IS NULL OR contrato_id = $3)
            ORDER BY fecha_pago DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .bind(contrato_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pagos)
    }

    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        monto: Option<Decimal>,
        fecha_pago: Option<DateTime<Utc>>,
    ) -> Result<Option<Pago>, AppError> {
        let current = match self.find_by_id(id).await? {
            Some(p) => p,
            None => return Ok(None),
        };

        let pago = sqlx::query_as::<_, Pago>(
            r#"
            UPDATE pagos
            SET monto = $2, fecha_pago = $3, id_usuario_edicion = $4, fecha_actualizacion = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(monto.unwrap_or(current.monto))
        .bind(fecha_pago.unwrap_or(current.fecha_pago))
        .bind(id_usuario_edicion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(pago))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM pagos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
