use clap::Parser;
use linkwatch::db::schema;
use linkwatch::monitoring::{HealthCheckService, HttpProber, SeaOrmItemStore};
use linkwatch::server::config::ServerConfig;
use linkwatch::web::{self, AppState};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,
}

fn init_logging(log_dir: &str) {
    // Log to a file: JSON format, daily rotation
    let file_appender = rolling::daily(log_dir, "server.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .json();

    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sea_orm=warn,sqlx::query=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal.");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let server_config = match ServerConfig::load(args.config.as_deref()) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to load server configuration: {e}");
            return Err(e.into());
        }
    };

    init_logging(&server_config.log_dir);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting server.");

    // --- Database Setup ---
    let mut opt = ConnectOptions::new(server_config.database_url.clone());
    opt.max_connections(10).sqlx_logging(false);
    let db_pool: DatabaseConnection = match Database::connect(opt).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "Failed to connect to the database.");
            return Err(e.into());
        }
    };
    schema::ensure_schema(&db_pool).await?;
    info!("Connected to database.");

    // --- Health Check Setup ---
    let prober = HttpProber::new(
        Duration::from_millis(server_config.check_timeout_ms),
        server_config.check_user_agent.clone(),
    )?;
    let health_check_service = Arc::new(HealthCheckService::new(
        Arc::new(SeaOrmItemStore::new(db_pool.clone())),
        Arc::new(prober),
    ));

    if server_config.check_interval_seconds > 0 {
        let service = health_check_service.clone();
        let period = server_config.check_interval_seconds;
        tokio::spawn(async move {
            service.start_periodic_sweep(period).await;
        });
    }

    // --- Axum HTTP Server Setup ---
    let app = web::create_axum_router(Arc::new(AppState {
        db_pool,
        health_check_service,
        config: server_config.clone(),
    }));

    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, base_path = %server_config.base_path, "HTTP server listening.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
