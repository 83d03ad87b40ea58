//! Repositorio de Contrato
//!
//! Coordina el estado del contrato con el flag `disponible` del vehículo:
//! crear un contrato reserva el vehículo, desactivarlo o eliminarlo lo
//! libera. Cada operación que toca ambas tablas corre dentro de una sola
//! transacción, con la fila del vehículo bloqueada `FOR UPDATE`, de modo que
//! nunca queda un vehículo reservado-pero-disponible ni lo contrario.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::contrato::{validar_fechas, Contrato, UpdateContratoRequest};
use crate::models::vehiculo::Vehiculo;
use crate::utils::errors::AppError;

pub struct ContratoRepository {
    pool: PgPool,
}

impl ContratoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear un contrato y marcar el vehículo como no disponible.
    ///
    /// Falla con error de validación si las fechas están invertidas, si el
    /// vehículo no existe o si ya está reservado. El insert del contrato y
    /// el flip del flag se confirman juntos o no se confirman.
    pub async fn create(
        &self,
        cliente_id: Uuid,
        vehiculo_id: Uuid,
        empleado_id: Uuid,
        fecha_inicio: DateTime<Utc>,
        fecha_fin: Option<DateTime<Utc>>,
        id_usuario_creacion: Uuid,
    ) -> Result<Contrato, AppError> {
        validar_fechas(fecha_inicio, fecha_fin)?;

        let mut tx = self.pool.begin().await?;

        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            "SELECT * FROM vehiculos WHERE id = $1 FOR UPDATE",
        )
        .bind(vehiculo_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::Validation("El vehículo no existe".to_string()))?;

        if !vehiculo.disponible {
            return Err(AppError::Validation(
                "El vehículo no está disponible para contrato".to_string(),
            ));
        }

        let contrato = sqlx::query_as::<_, Contrato>(
            r#"
            INSERT INTO contratos
                (id, cliente_id, vehiculo_id, empleado_id, fecha_inicio, fecha_fin,
                 activo, id_usuario_creacion, fecha_creacion)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(cliente_id)
        .bind(vehiculo_id)
        .bind(empleado_id)
        .bind(fecha_inicio)
        .bind(fecha_fin)
        .bind(id_usuario_creacion)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE vehiculos
            SET disponible = FALSE, id_usuario_edicion = $2, fecha_actualizacion = $3
            WHERE id = $1
            "#,
        )
        .bind(vehiculo_id)
        .bind(id_usuario_creacion)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Contrato {} creado, vehículo {} reservado",
            contrato.id,
            vehiculo_id
        );

        Ok(contrato)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Contrato>, AppError> {
        let contrato = sqlx::query_as::<_, Contrato>("SELECT * FROM contratos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(contrato)
    }

    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        solo_activos: bool,
    ) -> Result<Vec<Contrato>, AppError> {
        let contratos = sqlx::query_as::<_, Contrato>(
            r#"
            SELECT * FROM contratos
            WHERE ($3 = FALSE OR activo = TRUE)
            ORDER BY fecha_creacion DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .bind(solo_activos)
        .fetch_all(&self.pool)
        .await?;

        Ok(contratos)
    }

    /// Actualizar un contrato aplicando solo los campos presentes.
    ///
    /// Las fechas se validan con la combinación resultante (valor nuevo si
    /// viene en el patch, valor almacenado si no) antes de escribir nada.
    /// Si `activo` pasa de true a false, el vehículo asociado vuelve a
    /// quedar disponible dentro de la misma transacción.
    pub async fn update(
        &self,
        id: Uuid,
        id_usuario_edicion: Uuid,
        patch: &UpdateContratoRequest,
    ) -> Result<Option<Contrato>, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Contrato>(
            "SELECT * FROM contratos WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let current = match current {
            Some(c) => c,
            None => return Ok(None),
        };

        let (fecha_inicio, fecha_fin) = patch.fechas_resultantes(&current);
        validar_fechas(fecha_inicio, fecha_fin)?;

        let activo = patch.activo.unwrap_or(current.activo);

        let contrato = sqlx::query_as::<_, Contrato>(
            r#"
            UPDATE contratos
            SET fecha_inicio = $2, fecha_fin = $3, activo = $4,
                id_usuario_edicion = $5, fecha_actualizacion = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(fecha_inicio)
        .bind(fecha_fin)
        .bind(activo)
        .bind(id_usuario_edicion)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        if current.activo && !activo {
            sqlx::query(
                r#"
                UPDATE vehiculos
                SET disponible = TRUE, id_usuario_edicion = $2, fecha_actualizacion = $3
                WHERE id = $1
                "#,
            )
            .bind(current.vehiculo_id)
            .bind(id_usuario_edicion)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

            tracing::info!(
                "Contrato {} desactivado, vehículo {} liberado",
                id,
                current.vehiculo_id
            );
        }

        tx.commit().await?;

        Ok(Some(contrato))
    }

    /// Eliminar un contrato y marcar el vehículo como disponible.
    ///
    /// Devuelve false si el contrato no existe (no hay nada que borrar).
    pub async fn delete(&self, id: Uuid, id_usuario_edicion: Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Contrato>(
            "SELECT * FROM contratos WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let current = match current {
            Some(c) => c,
            None => return Ok(false),
        };

        sqlx::query(
            r#"
            UPDATE vehiculos
            SET disponible = TRUE, id_usuario_edicion = $2, fecha_actualizacion = $3
            WHERE id = $1
            "#,
        )
        .bind(current.vehiculo_id)
        .bind(id_usuario_edicion)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM contratos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Contrato {} eliminado, vehículo {} liberado",
            id,
            current.vehiculo_id
        );

        Ok(true)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contratos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    use crate::repositories::cliente_repository::ClienteRepository;
    use crate::repositories::empleado_repository::EmpleadoRepository;
    use crate::repositories::tipo_vehiculo_repository::TipoVehiculoRepository;
    use crate::repositories::usuario_repository::UsuarioRepository;
    use crate::repositories::vehiculo_repository::VehiculoRepository;

    // Estos tests requieren PostgreSQL: corren solo si DATABASE_URL está
    // definida, y aplican las migraciones antes de usar el pool.
    async fn pool_de_prueba() -> Option<PgPool> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .ok()?;
        sqlx::migrate!().run(&pool).await.ok()?;
        Some(pool)
    }

    fn sufijo() -> String {
        Uuid::new_v4().simple().to_string()
    }

    struct DatosBase {
        usuario_id: Uuid,
        cliente_id: Uuid,
        empleado_id: Uuid,
        vehiculo_id: Uuid,
    }

    // Cada test crea su propia cadena usuario -> cliente/empleado/tipo ->
    // vehículo con claves únicas, para poder compartir la base de datos.
    async fn datos_base(pool: &PgPool) -> DatosBase {
        let usuario = UsuarioRepository::new(pool.clone())
            .create(
                format!("u_{}", sufijo()),
                "hash-de-prueba".to_string(),
                "admin".to_string(),
                None,
            )
            .await
            .unwrap();

        let cliente = ClienteRepository::new(pool.clone())
            .create(
                "Ana Pérez".to_string(),
                format!("{}@clientes.test", sufijo()),
                None,
                true,
                usuario.id,
            )
            .await
            .unwrap();

        let empleado = EmpleadoRepository::new(pool.clone())
            .create(
                "Luis Gómez".to_string(),
                format!("{}@empleados.test", sufijo()),
                "Asesor".to_string(),
                true,
                usuario.id,
            )
            .await
            .unwrap();

        let tipo = TipoVehiculoRepository::new(pool.clone())
            .create(format!("Tipo {}", sufijo()), None, true, usuario.id)
            .await
            .unwrap();

        let vehiculo = VehiculoRepository::new(pool.clone())
            .create(
                tipo.id,
                "Toyota".to_string(),
                "Corolla".to_string(),
                None,
                true,
                usuario.id,
            )
            .await
            .unwrap();

        DatosBase {
            usuario_id: usuario.id,
            cliente_id: cliente.id,
            empleado_id: empleado.id,
            vehiculo_id: vehiculo.id,
        }
    }

    async fn contratos_del_vehiculo(pool: &PgPool, vehiculo_id: Uuid) -> i64 {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM contratos WHERE vehiculo_id = $1")
                .bind(vehiculo_id)
                .fetch_one(pool)
                .await
                .unwrap();
        count.0
    }

    #[tokio::test]
    async fn test_ciclo_de_disponibilidad_del_vehiculo() {
        let Some(pool) = pool_de_prueba().await else { return };
        let datos = datos_base(&pool).await;
        let repo = ContratoRepository::new(pool.clone());
        let vehiculos = VehiculoRepository::new(pool.clone());

        // Crear el contrato reserva el vehículo
        let contrato = repo
            .create(
                datos.cliente_id,
                datos.vehiculo_id,
                datos.empleado_id,
                Utc::now(),
                None,
                datos.usuario_id,
            )
            .await
            .unwrap();

        let vehiculo = vehiculos
            .find_by_id(datos.vehiculo_id)
            .await
            .unwrap()
            .unwrap();
        assert!(!vehiculo.disponible);

        // Un segundo contrato sobre el mismo vehículo se rechaza sin escribir
        let resultado = repo
            .create(
                datos.cliente_id,
                datos.vehiculo_id,
                datos.empleado_id,
                Utc::now(),
                None,
                datos.usuario_id,
            )
            .await;
        assert!(matches!(resultado, Err(AppError::Validation(_))));
        assert_eq!(contratos_del_vehiculo(&pool, datos.vehiculo_id).await, 1);

        // Desactivar el contrato libera el vehículo
        let patch = UpdateContratoRequest {
            activo: Some(false),
            ..Default::default()
        };
        repo.update(contrato.id, datos.usuario_id, &patch)
            .await
            .unwrap()
            .unwrap();

        let vehiculo = vehiculos
            .find_by_id(datos.vehiculo_id)
            .await
            .unwrap()
            .unwrap();
        assert!(vehiculo.disponible);
    }

    #[tokio::test]
    async fn test_eliminar_contrato_libera_vehiculo() {
        let Some(pool) = pool_de_prueba().await else { return };
        let datos = datos_base(&pool).await;
        let repo = ContratoRepository::new(pool.clone());
        let vehiculos = VehiculoRepository::new(pool.clone());

        let contrato = repo
            .create(
                datos.cliente_id,
                datos.vehiculo_id,
                datos.empleado_id,
                Utc::now(),
                None,
                datos.usuario_id,
            )
            .await
            .unwrap();

        assert!(repo.delete(contrato.id, datos.usuario_id).await.unwrap());

        let vehiculo = vehiculos
            .find_by_id(datos.vehiculo_id)
            .await
            .unwrap()
            .unwrap();
        assert!(vehiculo.disponible);
        assert!(repo.find_by_id(contrato.id).await.unwrap().is_none());
        assert_eq!(contratos_del_vehiculo(&pool, datos.vehiculo_id).await, 0);
    }

    #[tokio::test]
    async fn test_fechas_invertidas_no_persisten_contrato() {
        let Some(pool) = pool_de_prueba().await else { return };
        let datos = datos_base(&pool).await;
        let repo = ContratoRepository::new(pool.clone());
        let vehiculos = VehiculoRepository::new(pool.clone());

        let inicio = Utc::now();
        let fin = inicio - chrono::Duration::days(9);
        let resultado = repo
            .create(
                datos.cliente_id,
                datos.vehiculo_id,
                datos.empleado_id,
                inicio,
                Some(fin),
                datos.usuario_id,
            )
            .await;

        assert!(matches!(resultado, Err(AppError::Validation(_))));
        assert_eq!(contratos_del_vehiculo(&pool, datos.vehiculo_id).await, 0);

        // El vehículo sigue disponible
        let vehiculo = vehiculos
            .find_by_id(datos.vehiculo_id)
            .await
            .unwrap()
            .unwrap();
        assert!(vehiculo.disponible);
    }

    #[tokio::test]
    async fn test_patch_invertido_no_modifica_contrato() {
        let Some(pool) = pool_de_prueba().await else { return };
        let datos = datos_base(&pool).await;
        let repo = ContratoRepository::new(pool.clone());

        let inicio = Utc::now();
        let contrato = repo
            .create(
                datos.cliente_id,
                datos.vehiculo_id,
                datos.empleado_id,
                inicio,
                None,
                datos.usuario_id,
            )
            .await
            .unwrap();

        // fecha_fin anterior a la fecha_inicio almacenada
        let patch = UpdateContratoRequest {
            fecha_fin: Some(Some(inicio - chrono::Duration::days(3))),
            ..Default::default()
        };
        let resultado = repo.update(contrato.id, datos.usuario_id, &patch).await;
        assert!(matches!(resultado, Err(AppError::Validation(_))));

        let actual = repo.find_by_id(contrato.id).await.unwrap().unwrap();
        assert_eq!(actual.fecha_fin, None);
        assert!(actual.activo);
    }
}
