use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use cmms_backend::config::{DatabaseConfig, EnvironmentConfig};
use cmms_backend::database::DatabaseConnection;
use cmms_backend::routes::create_app;
use cmms_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🛠️ CMMS Backend - métricas FMD y facturación");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::from_env()?).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if config.run_migrations {
        db_connection.run_migrations().await?;
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📊 FMD:");
    info!("   GET  /api/fmd/metrics?period_days=&asset_id= - MTTR / MTBF / disponibilidad");
    info!("🔧 Fallas:");
    info!("   POST /api/breakdowns - Registrar falla");
    info!("   PUT  /api/breakdowns/:id - Completar timestamps");
    info!("💶 Órdenes de trabajo:");
    info!("   GET  /api/work-orders/:id/invoicing - Decisión de facturación");
    info!("   PUT  /api/work-orders/:id/invoice-status - Avanzar facturación");
    info!("📄 Contratos:");
    info!("   GET  /api/contracts - Listar contratos");
    info!("   POST /api/contracts - Crear contrato");
    info!("   GET  /api/contracts/expiring - Contratos por vencer");
    info!("   GET  /api/contracts/active-sites - Sitios con contrato activo");
    info!("   POST /api/contracts/refresh-status - Recalcular estados");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
