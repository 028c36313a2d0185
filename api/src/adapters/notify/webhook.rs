//! HTTP webhook notifier

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{header, Client};
use sha2::Sha256;

use crate::domain::entities::ProjectId;
use crate::domain::ports::{Notice, Notifier};
use crate::error::NotifyError;

/// Header carrying `sha256=<hex>` when a signing key is configured
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Posts each notice as JSON to a single endpoint
pub struct WebhookNotifier {
    http: Client,
    url: String,
    secret: Option<String>,
}

impl WebhookNotifier {
    pub fn new(url: String, secret: Option<String>) -> Self {
        Self {
            http: Client::new(),
            url,
            secret,
        }
    }

    async fn deliver(&self, notice: &Notice) -> Result<(), NotifyError> {
        let body = serde_json::to_vec(notice)?;

        let mut request = self
            .http
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(secret) = &self.secret {
            let signature = sign_payload(secret, &body)?;
            request = request.header(SIGNATURE_HEADER, format!("sha256={}", signature));
        }

        let response = request.body(body).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 429 {
            Err(NotifyError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(NotifyError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send_level_up(&self, email: &str, level: i32) -> Result<(), NotifyError> {
        self.deliver(&Notice::LevelUp {
            email: email.to_string(),
            level,
            timestamp: Utc::now(),
        })
        .await
    }

    async fn send_terminal_tier(&self, project_id: &ProjectId) -> Result<(), NotifyError> {
        self.deliver(&Notice::TerminalTier {
            project_id: *project_id,
            timestamp: Utc::now(),
        })
        .await
    }
}

/// Hex-encoded HMAC-SHA256 of `payload`
pub fn sign_payload(secret: &str, payload: &[u8]) -> Result<String, NotifyError> {
    type HmacSha256 = Hmac<Sha256>;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| NotifyError::InvalidKey)?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
