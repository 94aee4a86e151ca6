// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleStatus, ArticleUpdate},
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl ArticleCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut update = ArticleUpdate::new(id, self.clock.now());
        update.status = Some(if command.publish {
            ArticleStatus::Published
        } else {
            ArticleStatus::Draft
        });

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
