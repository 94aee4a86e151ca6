use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pagination controls for one resolved feed page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    pub page: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageInfo {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }
}
