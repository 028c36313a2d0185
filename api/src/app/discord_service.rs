//! Discord integration service
//!
//! Bot installation status and server linking for projects.

use std::sync::Arc;

use crate::config::DEFAULT_DISCORD_CLIENT_ID;
use crate::domain::entities::{DiscordEngagement, InstallationStatus, ProjectId};
use crate::domain::ports::{DiscordRepository, ProjectRepository};
use crate::error::AppError;

use super::discord_parser::extract_discord_info;

/// OAuth2 parameters for the bot authorization link
#[derive(Debug, Clone)]
pub struct DiscordBotConfig {
    pub client_id: String,
    /// Permission bitmask; 8 is Administrator
    pub permissions: &'static str,
    pub scope: &'static str,
    pub base_url: &'static str,
}

impl DiscordBotConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            permissions: "8",
            scope: "bot",
            base_url: "https://discord.com/api/oauth2/authorize",
        }
    }

    /// Link that adds the bot to a server
    pub fn installation_url(&self) -> String {
        format!(
            "{}?client_id={}&permissions={}&scope={}",
            self.base_url,
            self.client_id,
            self.permissions,
            self.scope
        )
    }
}

impl Default for DiscordBotConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DISCORD_CLIENT_ID)
    }
}

/// Service for a project's Discord server and bot
pub struct DiscordService<PR, DR>
where
    PR: ProjectRepository,
    DR: DiscordRepository,
{
    projects: Arc<PR>,
    discord: Arc<DR>,
    bot: DiscordBotConfig,
}

impl<PR, DR> DiscordService<PR, DR>
where
    PR: ProjectRepository,
    DR: DiscordRepository,
{
    pub fn new(projects: Arc<PR>, discord: Arc<DR>, bot: DiscordBotConfig) -> Self {
        Self {
            projects,
            discord,
            bot,
        }
    }

    pub fn installation_url(&self) -> String {
        self.bot.installation_url()
    }

    /// Whether the bot is in the project's server.
    ///
    /// Lookup failures are treated as "not installed" so the caller can always
    /// show the installation link.
    pub async fn check_installation(&self, project_id: &ProjectId) -> InstallationStatus {
        match self.discord.find_by_project(project_id).await {
            Ok(Some(discord)) if discord.bot_added => InstallationStatus {
                installed: true,
                installation_link: None,
            },
            Ok(_) => self.not_installed(),
            Err(e) => {
                tracing::error!(error = %e, project_id = %project_id, "Failed to check bot installation status");
                self.not_installed()
            }
        }
    }

    fn not_installed(&self) -> InstallationStatus {
        InstallationStatus {
            installed: false,
            installation_link: Some(self.installation_url()),
        }
    }

    /// Parse a pasted invite or server id and store it for the project
    pub async fn link_server(
        &self,
        project_id: &ProjectId,
        text: &str,
    ) -> Result<DiscordEngagement, AppError> {
        let reference = extract_discord_info(text);
        if reference.is_empty() {
            return Err(AppError::BadRequest(
                "No Discord invite link or server id found".to_string(),
            ));
        }

        if self.projects.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Project {} not found",
                project_id
            )));
        }

        let discord = self
            .discord
            .link_server(
                project_id,
                reference.server_id.as_deref(),
                reference.invite_link.as_deref(),
            )
            .await?;

        tracing::info!(
            project_id = %project_id,
            server_id = ?discord.server_id,
            invite = ?reference.invite_code,
            "Linked Discord server"
        );

        Ok(discord)
    }
}
