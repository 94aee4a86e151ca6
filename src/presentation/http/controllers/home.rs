// src/presentation/http/controllers/home.rs
use crate::application::dto::HomePageDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/home",
    responses(
        (status = 200, description = "Latest articles and next events for the homepage.", body = HomePageDto)
    ),
    tag = "Home"
)]
pub async fn home_page(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomePageDto>> {
    state
        .services
        .home_queries
        .home_page()
        .await
        .into_http()
        .map(Json)
}
