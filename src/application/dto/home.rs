use crate::application::dto::articles::ArticleDto;
use crate::application::dto::events::EventDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Homepage aggregate: the latest published articles and the next events.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomePageDto {
    pub articles: Vec<ArticleDto>,
    pub events: Vec<EventDto>,
}
