//! Project handlers
//!
//! Project summary and stored-project level checks.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::app::LevelCheck;
use crate::domain::entities::{next_level_requirements, DiscordEngagement, ProjectId};
use crate::domain::ports::ProjectRepository;
use crate::error::AppError;
use crate::AppState;

/// Discord counters shown with a project
#[derive(Debug, Serialize)]
pub struct DiscordSummary {
    pub server_id: Option<String>,
    pub invite_link: Option<String>,
    pub bot_added: bool,
    pub member_count: i32,
    pub papers_shared: i32,
    pub messages_count: i32,
}

impl From<DiscordEngagement> for DiscordSummary {
    fn from(d: DiscordEngagement) -> Self {
        Self {
            server_id: d.server_id,
            invite_link: d.invite_link,
            bot_added: d.bot_added,
            member_count: d.member_count,
            papers_shared: d.papers_shared,
            messages_count: d.messages_count,
        }
    }
}

/// Response for a single project
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub level: i32,
    pub next_requirements: Vec<&'static str>,
    pub discord: Option<DiscordSummary>,
    pub created_at: String,
}

/// Response for a level check
#[derive(Debug, Serialize)]
pub struct LevelCheckResponse {
    pub project_id: String,
    pub promoted: bool,
    pub previous_level: i32,
    pub level: i32,
    pub next_requirements: Vec<&'static str>,
}

impl LevelCheckResponse {
    /// Build the response; pending notices keep running after this returns
    pub fn new(project_id: ProjectId, check: LevelCheck) -> Self {
        Self {
            project_id: project_id.to_string(),
            promoted: check.promoted,
            previous_level: check.previous_level,
            level: check.level,
            next_requirements: next_level_requirements(check.level).to_vec(),
        }
    }
}

/// GET /projects/:id
///
/// Get a project's level, next requirements and Discord counters.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state
        .project_repo
        .find_by_id(&ProjectId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

    Ok(Json(ProjectResponse {
        id: project.id.to_string(),
        name: project.name,
        level: project.level,
        next_requirements: next_level_requirements(project.level).to_vec(),
        discord: project.discord.map(DiscordSummary::from),
        created_at: project.created_at.to_rfc3339(),
    }))
}

/// POST /projects/:id/level-check
///
/// Evaluate the stored project and promote it if it qualifies.
pub async fn check_level(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LevelCheckResponse>, AppError> {
    let project_id = ProjectId(id);
    let check = state.level_service.check_progress(&project_id).await?;

    Ok(Json(LevelCheckResponse::new(project_id, check)))
}
