//! PostgreSQL adapter for ProjectRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::entities::{DiscordEngagement, Project, ProjectId};
use crate::domain::ports::ProjectRepository;
use crate::entity::{discord, projects};
use crate::error::DomainError;

/// PostgreSQL implementation of ProjectRepository
pub struct PostgresProjectRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresProjectRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let result = projects::Entity::find_by_id(id.0)
            .find_also_related(discord::Entity)
            .one(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|(project, discord)| to_project(project, discord)))
    }

    async fn update_level(&self, id: &ProjectId, from: i32, to: i32) -> Result<(), DomainError> {
        // Compare-and-set on the current level so two concurrent checks
        // cannot both promote the same project.
        let result = projects::Entity::update_many()
            .col_expr(projects::Column::Level, Expr::value(to))
            .filter(projects::Column::Id.eq(id.0))
            .filter(projects::Column::Level.eq(from))
            .exec(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            let exists = projects::Entity::find_by_id(id.0)
                .one(&*self.db)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?
                .is_some();

            return Err(if exists {
                DomainError::Conflict(format!("Project {} is no longer at level {}", id, from))
            } else {
                DomainError::NotFound(format!("Project {} not found", id))
            });
        }

        Ok(())
    }
}

/// Convert a project row and its optional Discord row to a domain entity
fn to_project(model: projects::Model, discord: Option<discord::Model>) -> Project {
    Project {
        id: ProjectId(model.id),
        name: model.name,
        level: model.level,
        email: model.email,
        discord: discord.map(DiscordEngagement::from),
        created_at: model.created_at.with_timezone(&Utc),
    }
}

/// Convert SeaORM model to domain entity
impl From<discord::Model> for DiscordEngagement {
    fn from(model: discord::Model) -> Self {
        DiscordEngagement {
            project_id: ProjectId(model.project_id),
            server_id: model.server_id,
            invite_link: model.invite_link,
            bot_added: model.bot_added,
            member_count: model.member_count,
            papers_shared: model.papers_shared,
            messages_count: model.messages_count,
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
