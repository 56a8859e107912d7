use axum::{Router, http::Method, routing::get};
use tower_http::cors::{Any, CorsLayer};
use ttt_common::log;

use crate::server_config::ServerConfig;
use crate::solve_handler::{health_handler, solve_handler};

pub fn build_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{row1}/{row2}/{row3}/{player_choice}", get(solve_handler));

    if config.allow_any_origin {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

pub async fn run_web_server(
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = build_router(&config);
    let addr = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log!("Tic-tac-toe solver listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
