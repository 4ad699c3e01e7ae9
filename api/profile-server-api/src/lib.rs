use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use profile_server_app::Application;

mod app;
mod profile;

pub use app::ServiceError;

const SERVICE_PATH: &str = "/profile.ProfileHandler";

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    let rpc: Router<AppState> = Router::new()
        .route(
            "/GetProfileByUserId",
            post(profile::get_profile_by_user_id),
        )
        .route("/CreateProfile", post(profile::create_profile))
        .route("/UpdateProfile", post(profile::update_profile))
        .route(
            "/DeleteProfileByUserId",
            post(profile::delete_profile_by_user_id),
        );

    Router::new()
        .route("/", get(usage))
        .nest(SERVICE_PATH, rpc)
        .with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    host: &str,
    port: u16,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;

    info!("Profile API listening on {}:{}", host, port);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Profile API shut down gracefully");
    Ok(())
}

async fn usage() -> &'static str {
    "Profiles are served over RPC. POST JSON requests to /profile.ProfileHandler/{method}."
}
