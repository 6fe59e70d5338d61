use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use connect_signup::app::{App, shell};
use connect_signup::config::{ServerConfig, SignupConfig};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server = ServerConfig::from_env().expect("invalid server config");
    let signup = SignupConfig::from_env().expect("invalid signup config");
    tracing::info!(
        submit_latency = ?signup.submit_latency,
        reply_delay = ?signup.reply_delay,
        "signup config loaded"
    );

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes_with_context(&leptos_options, routes, move || provide_context(signup), {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", server.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = server.port, "connect-signup listening");
    axum::serve(listener, app).await.expect("server failed");
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
