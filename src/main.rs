use std::sync::Arc;

use log::info;
use profile_persistence_dashmap::InMemoryProfileRepository;
use profile_persistence_sea_orm::{
    create_db_pool, create_schema, profile_repository::ProfileRepositoryImpl,
};
use profile_server_app::{Application, build_application};

use crate::config::{ServerConfig, StoreConfig};

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

async fn build_app(store: &StoreConfig) -> Application {
    match store {
        StoreConfig::Sql {
            db_url,
            max_connections,
            create_schema: with_schema,
        } => {
            let db = create_db_pool(db_url, *max_connections)
                .await
                .expect("Failed to connect to database");
            if *with_schema {
                create_schema(&db)
                    .await
                    .expect("Failed to create profile tables");
            }
            info!("Using SQL profile store");
            build_application(Arc::new(ProfileRepositoryImpl::new(db)))
        }
        StoreConfig::Memory => {
            info!("Using in-memory profile store, profiles are lost on exit");
            build_application(Arc::new(InMemoryProfileRepository::new()))
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    logs::init_logger().expect("Failed to initialize logger");

    let config = ServerConfig::from_env().expect("Invalid configuration");
    let app = Arc::new(build_app(&config.store).await);

    info!("Starting application");

    if let Err(e) =
        profile_server_api::run(app, &config.host, config.port, shutdown_signal()).await
    {
        log::error!("Profile API failed: {}", e);
        std::process::exit(1);
    }
}
