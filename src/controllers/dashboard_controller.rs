//! Controlador del dashboard

use sqlx::PgPool;

use crate::dto::auth_dto::DashboardCounts;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::contrato_repository::ContratoRepository;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::AppError;

pub struct DashboardController {
    cliente_repository: ClienteRepository,
    vehiculo_repository: VehiculoRepository,
    contrato_repository: ContratoRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cliente_repository: ClienteRepository::new(pool.clone()),
            vehiculo_repository: VehiculoRepository::new(pool.clone()),
            contrato_repository: ContratoRepository::new(pool),
        }
    }

    pub async fn counts(&self) -> Result<DashboardCounts, AppError> {
        Ok(DashboardCounts {
            clientes: self.cliente_repository.count().await?,
            vehiculos: self.vehiculo_repository.count().await?,
            contratos: self.contrato_repository.count().await?,
        })
    }
}
