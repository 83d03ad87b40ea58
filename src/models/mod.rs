pub mod cliente;
pub mod contrato;
pub mod empleado;
pub mod pago;
pub mod tipo_vehiculo;
pub mod usuario;
pub mod vehiculo;
