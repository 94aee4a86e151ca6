// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::set_publish_state,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::divisions::divisions_overview,
        crate::presentation::http::controllers::events::list_events,
        crate::presentation::http::controllers::events::get_event,
        crate::presentation::http::controllers::home::home_page,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::PublishRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleIndexDto,
            crate::application::dto::ArticleFeedFragments,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::PageInfo,
            crate::application::dto::DivisionDto,
            crate::application::dto::DivisionsOverviewDto,
            crate::application::dto::ProjectDto,
            crate::application::dto::LeaderDto,
            crate::application::dto::EventDto,
            crate::application::dto::EventBoardDto,
            crate::application::dto::HomePageDto
        )
    ),
    tags(
        (name = "Articles", description = "Article feed and authoring."),
        (name = "Categories", description = "Article categories."),
        (name = "Divisions", description = "Organization divisions."),
        (name = "Events", description = "Event board."),
        (name = "Home", description = "Homepage aggregate."),
        (name = "System", description = "Health and diagnostics.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
