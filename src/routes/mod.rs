//! Routes Layer
//!
//! HTTP handlers that bridge browser forms to the list service.

mod error;
mod handlers;

use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::service::ListService;

pub use error::ApiError;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub lists: ListService,
}

impl AppState {
    pub fn new(lists: ListService) -> Self {
        Self { lists }
    }
}

/// Page and form routes; anything else is served from `static_dir`
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", post(handlers::add_item))
        .route("/edit", post(handlers::edit_item))
        .route("/delete", post(handlers::delete_item))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
