use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::recruitment_dto::{
        CreateRecruitmentPayload, RecruitmentResponse, RecruitmentSearchQuery, RecruitmentView,
        UpdateRecruitmentPayload,
    },
    error::Result,
    extract::{AppJson, PatchJson},
    AppState,
};

#[utoipa::path(
    post,
    path = "/wanted/api/recruitment",
    request_body = CreateRecruitmentPayload,
    responses(
        (status = 201, description = "Recruitment created successfully", body = RecruitmentResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn create_recruitment(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateRecruitmentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let recruitment = state.recruitment_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(RecruitmentResponse::from(recruitment))))
}

#[utoipa::path(
    get,
    path = "/wanted/api/recruitments",
    params(RecruitmentSearchQuery),
    responses(
        (status = 200, description = "Matching recruitments", body = [RecruitmentView])
    )
)]
#[axum::debug_handler]
pub async fn list_recruitments(
    State(state): State<AppState>,
    Query(query): Query<RecruitmentSearchQuery>,
) -> Result<impl IntoResponse> {
    let items = state
        .recruitment_service
        .search(query.search.as_deref())
        .await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/wanted/api/recruitment/{id}",
    params(
        ("id" = i64, Path, description = "Recruitment ID")
    ),
    responses(
        (status = 200, description = "Recruitment found", body = RecruitmentView),
        (status = 404, description = "Recruitment not found")
    )
)]
#[axum::debug_handler]
pub async fn get_recruitment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let view = state.recruitment_service.get(id).await?;
    Ok(Json(view))
}

#[utoipa::path(
    patch,
    path = "/wanted/api/recruitment/{id}",
    params(
        ("id" = i64, Path, description = "Recruitment ID")
    ),
    request_body = UpdateRecruitmentPayload,
    responses(
        (status = 200, description = "Recruitment updated successfully", body = RecruitmentResponse),
        (status = 400, description = "Invalid payload or company reassignment; an empty body is a no-op"),
        (status = 404, description = "Recruitment not found")
    )
)]
#[axum::debug_handler]
pub async fn update_recruitment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    PatchJson(payload): PatchJson<UpdateRecruitmentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let recruitment = state.recruitment_service.update(id, payload).await?;
    Ok(Json(RecruitmentResponse::from(recruitment)))
}

#[utoipa::path(
    delete,
    path = "/wanted/api/recruitment/{id}",
    params(
        ("id" = i64, Path, description = "Recruitment ID")
    ),
    responses(
        (status = 204, description = "Recruitment deleted successfully"),
        (status = 404, description = "Recruitment not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_recruitment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.recruitment_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
