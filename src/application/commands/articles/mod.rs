mod create;
mod publish;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use publish::SetPublishStateCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
