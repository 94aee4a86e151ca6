// src/presentation/http/controllers/categories.rs
use crate::application::commands::categories::CreateCategoryCommand;
use crate::application::dto::CategoryDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "All categories, ordered by name.", body = [CategoryDto])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    // The feed's own category list, exposed directly for filter UIs.
    state
        .services
        .article_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Created category.", body = CategoryDto)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .create_category(CreateCategoryCommand {
            name: payload.name,
            description: payload.description,
        })
        .await
        .into_http()
        .map(Json)
}
