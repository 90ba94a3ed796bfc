use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::cafe::{self, CafeParams};
use crate::catalog::CityCatalog;

// ============================================================
// Café Handlers
// ============================================================

// Repeated keys keep their first value; count stays text until validation.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn get_cafe_handler(
    State(catalog): State<Arc<CityCatalog>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, String) {
    cafe::handle(&catalog, CafeParams::from_pairs(pairs))
}

// ============================================================
// Health Handlers
// ============================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub cities: usize,
}

pub async fn get_health_handler(State(catalog): State<Arc<CityCatalog>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Running".to_string(),
        cities: catalog.len(),
    })
}
