use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::company_dto::{CompanyResponse, CreateCompanyPayload},
    error::Result,
    extract::AppJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/wanted/api/company",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Company created successfully", body = CompanyResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state.company_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(CompanyResponse::from(company))))
}
