use std::sync::Arc;

use axum::{Router, routing::get};

use super::handlers::{get_cafe_handler, get_health_handler};
use crate::catalog::CityCatalog;

pub fn create_cafe_routes() -> Router<Arc<CityCatalog>> {
    Router::new()
        .route("/", get(get_cafe_handler))
        .route("/cafe", get(get_cafe_handler))
}

pub fn create_health_routes() -> Router<Arc<CityCatalog>> {
    Router::new().route("/health", get(get_health_handler))
}
