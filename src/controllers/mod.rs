pub mod auth_controller;
pub mod cliente_controller;
pub mod contrato_controller;
pub mod dashboard_controller;
pub mod empleado_controller;
pub mod pago_controller;
pub mod tipo_vehiculo_controller;
pub mod usuario_controller;
pub mod vehiculo_controller;
