pub mod company;
pub mod docs;
pub mod health;
pub mod recruitment;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/wanted/api/openapi.json", get(docs::openapi))
        .route("/wanted/api/company", post(company::create_company))
        .route(
            "/wanted/api/recruitment",
            post(recruitment::create_recruitment),
        )
        .route(
            "/wanted/api/recruitments",
            get(recruitment::list_recruitments),
        )
        .route(
            "/wanted/api/recruitment/:id",
            get(recruitment::get_recruitment)
                .patch(recruitment::update_recruitment)
                .delete(recruitment::delete_recruitment),
        )
}
