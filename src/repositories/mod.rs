pub mod cliente_repository;
pub mod contrato_repository;
pub mod empleado_repository;
pub mod pago_repository;
pub mod tipo_vehiculo_repository;
pub mod usuario_repository;
pub mod vehiculo_repository;
