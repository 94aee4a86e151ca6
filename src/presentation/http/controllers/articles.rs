// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, SetPublishStateCommand, UpdateArticleCommand},
    dto::{ArticleDetailDto, ArticleDto, ArticleFeedFragments, ArticleIndexDto},
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticleListParams {
    #[serde(default)]
    pub search: Option<String>,
    /// Comma-separated category ids.
    #[serde(default)]
    pub category: Option<String>,
    /// One of `recent`, `oldest`, `popular`, `az`, `za`.
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub view_all: Option<String>,
    /// `true` switches the response to the fragment envelope.
    #[serde(default)]
    pub ajax: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub feature: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub category_ids: Option<Vec<i64>>,
    pub feature: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

fn is_fragment_request(params: &ArticleListParams, headers: &HeaderMap) -> bool {
    let flagged = params
        .ajax
        .as_deref()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    flagged
        || headers
            .get("x-requested-with")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.eq_ignore_ascii_case("xmlhttprequest"))
            .unwrap_or(false)
}

/// The article feed. Full-page context by default; the fragment envelope
/// when the request signals an incremental update.
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Filtered, sorted, paginated article feed.", body = ArticleIndexDto)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Response> {
    let query = ListArticlesQuery {
        search: params.search.clone(),
        category: params.category.clone(),
        sort: params.sort.clone(),
        page: params.page.clone(),
        view_all: params.view_all.clone(),
    };

    if is_fragment_request(&params, &headers) {
        let fragments: ArticleFeedFragments = state
            .services
            .article_queries
            .list_article_fragments(query)
            .await
            .into_http()?;
        Ok(Json(fragments).into_response())
    } else {
        let index: ArticleIndexDto = state
            .services
            .article_queries
            .list_articles(query)
            .await
            .into_http()?;
        Ok(Json(index).into_response())
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article detail with related articles; the view counter is incremented.", body = ArticleDetailDto),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Created article.", body = ArticleDto)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        author: payload.author,
        excerpt: payload.excerpt,
        body: payload.body,
        image: payload.image,
        slug: payload.slug,
        category_ids: payload.category_ids,
        publish: payload.publish,
        feature: payload.feature,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        author: payload.author,
        excerpt: payload.excerpt,
        body: payload.body,
        image: payload.image.map(Some),
        category_ids: payload.category_ids,
        feature: payload.feature,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article id")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Article with its new publish state.", body = ArticleDto)
    ),
    tag = "Articles"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .set_publish_state(SetPublishStateCommand {
            id,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}
