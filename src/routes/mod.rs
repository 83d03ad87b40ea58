pub mod auth_routes;
pub mod cliente_routes;
pub mod contrato_routes;
pub mod dashboard_routes;
pub mod empleado_routes;
pub mod pago_routes;
pub mod tipo_vehiculo_routes;
pub mod usuario_routes;
pub mod vehiculo_routes;

pub use auth_routes::create_auth_router;
pub use cliente_routes::create_cliente_router;
pub use contrato_routes::create_contrato_router;
pub use dashboard_routes::create_dashboard_router;
pub use empleado_routes::create_empleado_router;
pub use pago_routes::create_pago_router;
pub use tipo_vehiculo_routes::create_tipo_vehiculo_router;
pub use usuario_routes::create_usuario_router;
pub use vehiculo_routes::create_vehiculo_router;
