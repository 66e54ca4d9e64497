use axum::{
    routing::get,
    Router,
    http::StatusCode,
    response::IntoResponse,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

pub mod config;
use config::Config;

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Build the application routes for a configuration.
pub fn router(config: &Config) -> Router {
    let files = ServeDir::new(&config.public_directory)
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new().route("/health", get(health_check));
    // Static dataset, e.g. /public/satellites.json; axum cannot nest at "/"
    let mount = config.mount_path();
    let app = if mount == "/" {
        app.fallback_service(files)
    } else {
        app.nest_service(&mount, files)
    };

    let app = if config.enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http())
}
