//! # Activity Signup Service
//!
//! Mergington High School's extracurricular signup backend.
//!
//! A single axum router over an in-memory [`registry::Registry`] seeded at
//! startup. Three endpoints:
//!
//! - `GET /activities` — full roster as a JSON map of name to activity
//! - `POST /activities/{name}/signup?email=...` — add a participant
//! - `POST /activities/{name}/unregister?email=...` — remove a participant
//!
//! Errors come back as the matching HTTP status with a JSON `detail`
//! field. Nothing survives a restart; the registry is rebuilt from the
//! seed data every launch.
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod registry;
pub mod routes;
pub mod state;
pub mod utils;

use routes::{activities_handler, signup_handler, unregister_handler};
use state::AppState;

/// Router over the given state. Split out from [`start_server`] so tests
/// can drive the full HTTP surface without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/activities", get(activities_handler))
        .route("/activities/{activity_name}/signup", post(signup_handler))
        .route(
            "/activities/{activity_name}/unregister",
            post(unregister_handler),
        )
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Seeding activity registry...");
    let state = AppState::new();

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);

    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
