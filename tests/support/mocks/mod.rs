pub mod articles;
pub mod categories;
pub mod divisions;
pub mod events;
pub mod time;

pub use articles::InMemoryArticleRepo;
pub use categories::InMemoryCategoryRepo;
pub use divisions::InMemoryDivisionRepo;
pub use events::InMemoryEventRepo;
pub use time::{FixedClock, SimpleSlugGenerator};
