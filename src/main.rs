#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    config::RuntimeConfiguration,
    routes::{
        attendance::{get_record_attendance, get_view_attendance, post_record_attendance},
        fees::{get_add_fee, get_view_fees, post_add_fee},
        index::get_index_route,
        students::get_students,
    },
    state::CampusState,
};
use axum::{Router, routing::get};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod state;

async fn shutdown_signal(state: CampusState) {
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
    state.sensible_shutdown().await;
}

fn router(state: CampusState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/add-fee", get(get_add_fee).post(post_add_fee))
        .route("/view-fees", get(get_view_fees))
        .route(
            "/record-attendance",
            get(get_record_attendance).post(post_record_attendance),
        )
        .route("/view-attendance", get(get_view_attendance))
        .route("/students", get(get_students))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let dotenv_result = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");
    if let Err(e) = dotenv_result {
        debug!(?e, "no .env loaded, using process environment");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let state = CampusState::new(SqlitePoolOptions::new(), config)
        .await
        .expect("unable to create state");

    let app = router(state.clone());

    let server_ip = state.config().server_ip().to_string();
    let listener = TcpListener::bind(&server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .expect("unable to serve app");
}
