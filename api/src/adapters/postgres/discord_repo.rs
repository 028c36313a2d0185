//! PostgreSQL adapter for DiscordRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::domain::entities::{DiscordEngagement, ProjectId};
use crate::domain::ports::DiscordRepository;
use crate::entity::discord;
use crate::error::DomainError;

/// PostgreSQL implementation of DiscordRepository
pub struct PostgresDiscordRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresDiscordRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiscordRepository for PostgresDiscordRepository {
    async fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Option<DiscordEngagement>, DomainError> {
        let result = discord::Entity::find()
            .filter(discord::Column::ProjectId.eq(project_id.0))
            .one(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn link_server(
        &self,
        project_id: &ProjectId,
        server_id: Option<&str>,
        invite_link: Option<&str>,
    ) -> Result<DiscordEngagement, DomainError> {
        let now = Utc::now().fixed_offset();

        let existing = discord::Entity::find()
            .filter(discord::Column::ProjectId.eq(project_id.0))
            .one(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let result = match existing {
            Some(model) => {
                let mut active: discord::ActiveModel = model.into();
                if let Some(server_id) = server_id {
                    active.server_id = Set(Some(server_id.to_string()));
                }
                if let Some(invite_link) = invite_link {
                    active.invite_link = Set(Some(invite_link.to_string()));
                }
                active.updated_at = Set(now);
                active.update(&*self.db).await
            }
            None => {
                discord::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    project_id: Set(project_id.0),
                    server_id: Set(server_id.map(str::to_string)),
                    invite_link: Set(invite_link.map(str::to_string)),
                    bot_added: Set(false),
                    member_count: Set(0),
                    papers_shared: Set(0),
                    messages_count: Set(0),
                    updated_at: Set(now),
                }
                .insert(&*self.db)
                .await
            }
        }
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}
