// src/presentation/http/controllers/divisions.rs
use crate::application::dto::DivisionsOverviewDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/divisions",
    responses(
        (status = 200, description = "All divisions with activities, projects and leaders.", body = DivisionsOverviewDto)
    ),
    tag = "Divisions"
)]
pub async fn divisions_overview(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<DivisionsOverviewDto>> {
    state
        .services
        .division_queries
        .overview()
        .await
        .into_http()
        .map(Json)
}
