use crate::health;

use ua_config::ServerConfig;

use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};

/// Build the bundle router.
///
/// Files under `static_dir` are served as-is. Any path that does not match a
/// file gets the entry page with status 200 so client-side routes resolve.
pub fn build_router(config: &ServerConfig) -> Router {
    let entry_page = ServeFile::new(config.index_path());
    let bundle = ServeDir::new(&config.static_dir).fallback(entry_page);

    Router::new()
        .route("/health", get(health::health_check))
        .fallback_service(bundle)
}
