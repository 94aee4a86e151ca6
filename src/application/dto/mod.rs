pub mod articles;
pub mod categories;
pub mod divisions;
pub mod events;
pub mod home;
pub mod pagination;

pub use articles::{ArticleDetailDto, ArticleDto, ArticleFeedFragments, ArticleIndexDto};
pub use categories::CategoryDto;
pub use divisions::{DivisionDto, DivisionsOverviewDto, LeaderDto, ProjectDto};
pub use events::{EventBoardDto, EventDto};
pub use home::HomePageDto;
pub use pagination::PageInfo;
