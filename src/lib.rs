pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

use crate::database::Store;
use crate::extract::MAX_BODY_BYTES;
use crate::services::{company_service::CompanyService, recruitment_service::RecruitmentService};

#[derive(Clone)]
pub struct AppState {
    pub company_service: CompanyService,
    pub recruitment_service: RecruitmentService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        let company_service = CompanyService::new(store.clone());
        let recruitment_service = RecruitmentService::new(store);

        Self {
            company_service,
            recruitment_service,
        }
    }
}

/// The full HTTP application over `state`, with tracing, CORS and body limits.
pub fn app(state: AppState, cors_origins: &[String]) -> Router {
    routes::api_router()
        .with_state(state)
        .layer(middleware::cors::cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
