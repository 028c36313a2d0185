//! Level progression service
//!
//! Promotes projects one level at a time based on their Discord activity.
//! Evaluation never fails: storage and notice errors are logged and the
//! project is reported as not promoted.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::level_config::{
    COMMUNITY_LEVEL_MIN_MEMBERS, COMMUNITY_LEVEL_MIN_MESSAGES, COMMUNITY_LEVEL_MIN_PAPERS,
    DISCORD_LEVEL_MIN_MEMBERS,
};
use crate::domain::entities::{
    DiscordEngagement, Project, ProjectId, LEVEL_COMMUNITY, LEVEL_DISCORD, LEVEL_SANDBOX,
};
use crate::domain::ports::{Notifier, ProjectRepository};
use crate::error::AppError;

/// Activity thresholds for each promotion
#[derive(Debug, Clone)]
pub struct LevelThresholds {
    /// Members needed to go from the Discord level to the community level
    pub discord_min_members: i32,
    /// Members needed to reach the sandbox
    pub community_min_members: i32,
    /// Shared papers needed to reach the sandbox
    pub community_min_papers: i32,
    /// Messages needed to reach the sandbox
    pub community_min_messages: i32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            discord_min_members: DISCORD_LEVEL_MIN_MEMBERS,
            community_min_members: COMMUNITY_LEVEL_MIN_MEMBERS,
            community_min_papers: COMMUNITY_LEVEL_MIN_PAPERS,
            community_min_messages: COMMUNITY_LEVEL_MIN_MESSAGES,
        }
    }
}

/// The level a project at `level` qualifies for, if any.
///
/// Only the transition out of the current level is considered, so a project
/// never skips a level even when it already meets later thresholds.
pub fn promotion_target(
    level: i32,
    discord: &DiscordEngagement,
    thresholds: &LevelThresholds,
) -> Option<i32> {
    match level {
        LEVEL_DISCORD
            if discord.bot_added && discord.member_count >= thresholds.discord_min_members =>
        {
            Some(LEVEL_COMMUNITY)
        }
        LEVEL_COMMUNITY
            if discord.member_count >= thresholds.community_min_members
                && discord.papers_shared >= thresholds.community_min_papers
                && discord.messages_count >= thresholds.community_min_messages =>
        {
            Some(LEVEL_SANDBOX)
        }
        _ => None,
    }
}

/// Notice tasks submitted after a promotion
///
/// Dropping this detaches the tasks; they still run to completion.
#[derive(Debug, Default)]
pub struct PendingNotices {
    handles: Vec<JoinHandle<()>>,
}

impl PendingNotices {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every notice task to finish
    pub async fn wait(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Notice task did not complete");
            }
        }
    }
}

/// Outcome of a level check
#[derive(Debug)]
pub struct LevelCheck {
    pub promoted: bool,
    pub previous_level: i32,
    pub level: i32,
    pub notices: PendingNotices,
}

impl LevelCheck {
    fn unchanged(level: i32) -> Self {
        Self {
            promoted: false,
            previous_level: level,
            level,
            notices: PendingNotices::default(),
        }
    }
}

/// Service evaluating and applying level promotions
pub struct LevelService<PR, N>
where
    PR: ProjectRepository,
    N: Notifier + 'static,
{
    projects: Arc<PR>,
    notifier: Arc<N>,
    thresholds: LevelThresholds,
}

impl<PR, N> LevelService<PR, N>
where
    PR: ProjectRepository,
    N: Notifier + 'static,
{
    pub fn new(projects: Arc<PR>, notifier: Arc<N>) -> Self {
        Self {
            projects,
            notifier,
            thresholds: LevelThresholds::default(),
        }
    }

    /// Load a project from storage and evaluate it
    pub async fn check_progress(&self, id: &ProjectId) -> Result<LevelCheck, AppError> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        Ok(self.evaluate(&project).await)
    }

    /// Evaluate a project snapshot and promote it by one level if eligible.
    ///
    /// On promotion the new level is persisted first; notices are then
    /// submitted as independent tasks.
    pub async fn evaluate(&self, project: &Project) -> LevelCheck {
        let current = project.level;

        let Some(discord) = project.discord.as_ref() else {
            tracing::info!(project_id = %project.id, "Project has no Discord data, skipping level check");
            return LevelCheck::unchanged(current);
        };

        let Some(next) = promotion_target(current, discord, &self.thresholds) else {
            tracing::debug!(
                project_id = %project.id,
                level = current,
                members = discord.member_count,
                papers = discord.papers_shared,
                messages = discord.messages_count,
                "Project does not qualify for promotion"
            );
            return LevelCheck::unchanged(current);
        };

        tracing::info!(
            project_id = %project.id,
            from = current,
            to = next,
            members = discord.member_count,
            papers = discord.papers_shared,
            messages = discord.messages_count,
            "Leveling up project"
        );

        if let Err(e) = self.projects.update_level(&project.id, current, next).await {
            tracing::error!(error = %e, project_id = %project.id, "Failed to persist level-up");
            return LevelCheck::unchanged(current);
        }

        LevelCheck {
            promoted: true,
            previous_level: current,
            level: next,
            notices: self.submit_notices(project, next),
        }
    }

    fn submit_notices(&self, project: &Project, level: i32) -> PendingNotices {
        let mut handles = Vec::new();

        if let Some(email) = project.contact_email() {
            let notifier = self.notifier.clone();
            let email = email.to_string();
            let project_id = project.id;
            handles.push(tokio::spawn(async move {
                if let Err(e) = notifier.send_level_up(&email, level).await {
                    tracing::warn!(error = %e, project_id = %project_id, "Failed to send level-up notice");
                }
            }));
        }

        if level == LEVEL_SANDBOX {
            let notifier = self.notifier.clone();
            let project_id = project.id;
            handles.push(tokio::spawn(async move {
                if let Err(e) = notifier.send_terminal_tier(&project_id).await {
                    tracing::warn!(error = %e, project_id = %project_id, "Failed to send sandbox notice");
                }
            }));
        }

        PendingNotices { handles }
    }
}
