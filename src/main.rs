mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::create_pool;
use middleware::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let nivel = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(nivel).init();

    info!("🚗 Gestión de Alquiler de Vehículos - API");
    info!("=========================================");

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Error aplicando migraciones: {}", e))?;

    info!("Migraciones de base de datos aplicadas");

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/auth", routes::create_auth_router())
        .nest("/Usuarios", routes::create_usuario_router())
        .nest("/Clientes", routes::create_cliente_router())
        .nest("/Empleados", routes::create_empleado_router())
        .nest("/vehiculos", routes::create_vehiculo_router())
        .nest("/Tipos-de-Vehiculos", routes::create_tipo_vehiculo_router())
        .nest("/Contratos", routes::create_contrato_router())
        .nest("/pagos", routes::create_pago_router())
        .nest("/dashboard", routes::create_dashboard_router())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Autenticación:");
    info!("   POST /auth/login - Login de usuario");
    info!("👤 Usuarios:");
    info!("   POST /Usuarios - Crear usuario");
    info!("   GET  /Usuarios - Listar usuarios");
    info!("   PUT  /Usuarios/:id/cambiar-password - Cambiar contraseña");
    info!("🧑 Clientes:   CRUD en /Clientes");
    info!("🧑‍💼 Empleados:  CRUD en /Empleados");
    info!("🚗 Vehículos:  CRUD en /vehiculos");
    info!("🏷️  Tipos:      CRUD en /Tipos-de-Vehiculos");
    info!("📄 Contratos:  CRUD en /Contratos");
    info!("💰 Pagos:      CRUD en /pagos");
    info!("📊 Dashboard:  GET /dashboard/counts");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "gestion_alquiler",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
