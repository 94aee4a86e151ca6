// src/presentation/http/controllers/events.rs
use crate::application::dto::{EventBoardDto, EventDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/events",
    responses(
        (status = 200, description = "Upcoming and past events.", body = EventBoardDto)
    ),
    tag = "Events"
)]
pub async fn list_events(Extension(state): Extension<HttpState>) -> HttpResult<Json<EventBoardDto>> {
    state
        .services
        .event_queries
        .board()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event detail.", body = EventDto),
        (status = 404, description = "No event with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn get_event(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<EventDto>> {
    state
        .services
        .event_queries
        .get_event(id)
        .await
        .into_http()
        .map(Json)
}
