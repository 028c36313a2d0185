//! Level handlers
//!
//! Requirement lookup and evaluation of project snapshots pushed by
//! the ingestion bot. Snapshots carry the engagement counters, so they are
//! only accepted with a valid `X-Signature: sha256=<hex>` over the body.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use super::projects::LevelCheckResponse;
use crate::adapters::notify::webhook::SIGNATURE_HEADER;
use crate::domain::entities::{
    next_level_requirements, DiscordEngagement, Project, ProjectId, MAX_LEVEL, MIN_LEVEL,
};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Discord counters in a snapshot
#[derive(Debug, Deserialize)]
pub struct DiscordSnapshot {
    #[serde(default)]
    pub bot_added: bool,
    #[serde(default)]
    pub member_count: i32,
    #[serde(default)]
    pub papers_shared: i32,
    #[serde(default)]
    pub messages_count: i32,
}

/// Project snapshot submitted for evaluation
#[derive(Debug, Deserialize)]
pub struct ProjectSnapshot {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    pub level: i32,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub discord: Option<DiscordSnapshot>,
}

impl TryFrom<ProjectSnapshot> for Project {
    type Error = DomainError;

    fn try_from(snapshot: ProjectSnapshot) -> Result<Self, Self::Error> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&snapshot.level) {
            return Err(DomainError::Validation(format!(
                "level must be between {} and {}, got {}",
                MIN_LEVEL, MAX_LEVEL, snapshot.level
            )));
        }

        let id = ProjectId(snapshot.id);
        let discord = match snapshot.discord {
            Some(d) => {
                if d.member_count < 0 || d.papers_shared < 0 || d.messages_count < 0 {
                    return Err(DomainError::Validation(
                        "Discord counters must not be negative".to_string(),
                    ));
                }
                Some(DiscordEngagement {
                    bot_added: d.bot_added,
                    member_count: d.member_count,
                    papers_shared: d.papers_shared,
                    messages_count: d.messages_count,
                    ..DiscordEngagement::empty(id)
                })
            }
            None => None,
        };

        Ok(Project {
            id,
            name: snapshot.name.unwrap_or_default(),
            level: snapshot.level,
            email: snapshot.email,
            discord,
            created_at: Utc::now(),
        })
    }
}

/// Requirements for the level after `level`
#[derive(Debug, Serialize)]
pub struct RequirementsResponse {
    pub level: i32,
    pub requirements: Vec<&'static str>,
}

/// GET /levels/:level/requirements
pub async fn get_requirements(Path(level): Path<i32>) -> Json<RequirementsResponse> {
    Json(RequirementsResponse {
        level,
        requirements: next_level_requirements(level).to_vec(),
    })
}

/// Verify an HMAC-SHA256 body signature. Without a configured secret every
/// request is refused.
fn verify_signature(payload: &[u8], signature: Option<&str>, secret: Option<&str>) -> bool {
    let Some(secret) = secret else {
        tracing::warn!("Ingest secret not configured, refusing snapshot");
        return false;
    };

    let Some(sig_header) = signature else {
        tracing::warn!("No signature provided with snapshot");
        return false;
    };

    let expected_hex = sig_header.strip_prefix("sha256=").unwrap_or(sig_header);

    let expected_bytes = match hex::decode(expected_hex) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!("Invalid signature format");
            return false;
        }
    };

    type HmacSha256 = Hmac<Sha256>;
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => {
            tracing::error!("Invalid ingest secret key");
            return false;
        }
    };

    mac.update(payload);
    mac.verify_slice(&expected_bytes).is_ok()
}

/// POST /levels/check
///
/// Evaluate a signed project snapshot. The stored level is only moved when
/// it still matches the snapshot's level.
pub async fn check_snapshot(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<LevelCheckResponse>, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok());

    if !verify_signature(
        &body,
        signature,
        state.config.ingest_webhook_secret.as_deref(),
    ) {
        tracing::warn!("Snapshot signature verification failed");
        return Err(AppError::Unauthorized);
    }

    let snapshot: ProjectSnapshot = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse project snapshot");
        AppError::BadRequest(format!("Invalid JSON: {}", e))
    })?;

    let project = Project::try_from(snapshot)?;
    let check = state.level_service.evaluate(&project).await;

    Ok(Json(LevelCheckResponse::new(project.id, check)))
}
