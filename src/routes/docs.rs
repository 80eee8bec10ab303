use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    company_dto::{CompanyResponse, CreateCompanyPayload},
    recruitment_dto::{
        CreateRecruitmentPayload, RecruitmentResponse, RecruitmentView, UpdateRecruitmentPayload,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::company::create_company,
        crate::routes::recruitment::create_recruitment,
        crate::routes::recruitment::list_recruitments,
        crate::routes::recruitment::get_recruitment,
        crate::routes::recruitment::update_recruitment,
        crate::routes::recruitment::delete_recruitment,
    ),
    components(schemas(
        CreateCompanyPayload,
        CompanyResponse,
        CreateRecruitmentPayload,
        UpdateRecruitmentPayload,
        RecruitmentResponse,
        RecruitmentView,
    ))
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
