//! Discord handlers
//!
//! Bot installation status, invite parsing and server linking.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::app::extract_discord_info;
use crate::domain::entities::{DiscordReference, InstallationStatus, ProjectId};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct InstallationUrlResponse {
    pub installation_link: String,
}

/// Response after linking a server
#[derive(Debug, Serialize)]
pub struct LinkServerResponse {
    pub project_id: String,
    pub server_id: Option<String>,
    pub invite_link: Option<String>,
    pub bot_added: bool,
}

/// GET /discord/installation-url
pub async fn installation_url(State(state): State<AppState>) -> Json<InstallationUrlResponse> {
    Json(InstallationUrlResponse {
        installation_link: state.discord_service.installation_url(),
    })
}

/// POST /discord/extract
///
/// Pull a server id and invite link out of the plain-text body.
pub async fn extract_reference(body: String) -> Json<DiscordReference> {
    Json(extract_discord_info(&body))
}

/// GET /projects/:id/discord/installation
///
/// Always succeeds; lookup failures report the bot as not installed.
pub async fn check_installation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<InstallationStatus> {
    Json(state.discord_service.check_installation(&ProjectId(id)).await)
}

/// POST /projects/:id/discord
///
/// Link a Discord server to the project from a pasted invite or server id.
pub async fn link_server(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: String,
) -> Result<Json<LinkServerResponse>, AppError> {
    let project_id = ProjectId(id);
    let discord = state
        .discord_service
        .link_server(&project_id, body.trim())
        .await?;

    Ok(Json(LinkServerResponse {
        project_id: project_id.to_string(),
        server_id: discord.server_id,
        invite_link: discord.invite_link,
        bot_added: discord.bot_added,
    }))
}
