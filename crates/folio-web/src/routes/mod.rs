//! Router

pub mod static_files;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

pub fn create_router(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown image paths get the placeholder instead of a 404
    let images = ServeDir::new(config.images_dir())
        .fallback(ServeFile::new(config.placeholder_path()));

    Router::new()
        .route("/", get(static_files::serve_index))
        .route("/health", get(static_files::health))
        // WASM bundle with no-cache headers for development
        .nest_service(
            "/pkg",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-cache, no-store, must-revalidate"),
                ))
                .service(ServeDir::new(&config.pkg_dir).precompressed_gzip()),
        )
        .nest_service("/images", images)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
