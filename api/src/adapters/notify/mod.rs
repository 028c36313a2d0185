//! Notification adapters
//!
//! `LogNotifier` only records notices in the log; `WebhookNotifier` posts them
//! to an HTTP endpoint (mail relay or operations channel).

pub mod log;
pub mod webhook;

use async_trait::async_trait;

use crate::config::Config;
use crate::domain::entities::ProjectId;
use crate::domain::ports::Notifier;
use crate::error::NotifyError;

pub use self::log::LogNotifier;
pub use webhook::WebhookNotifier;

/// Notifier selected from configuration at startup
pub enum NotifierImpl {
    Log(LogNotifier),
    Webhook(WebhookNotifier),
}

impl NotifierImpl {
    pub fn from_config(config: &Config) -> Self {
        match &config.notify_webhook_url {
            Some(url) => NotifierImpl::Webhook(WebhookNotifier::new(
                url.clone(),
                config.notify_webhook_secret.clone(),
            )),
            None => NotifierImpl::Log(LogNotifier),
        }
    }
}

#[async_trait]
impl Notifier for NotifierImpl {
    async fn send_level_up(&self, email: &str, level: i32) -> Result<(), NotifyError> {
        match self {
            NotifierImpl::Log(n) => n.send_level_up(email, level).await,
            NotifierImpl::Webhook(n) => n.send_level_up(email, level).await,
        }
    }

    async fn send_terminal_tier(&self, project_id: &ProjectId) -> Result<(), NotifyError> {
        match self {
            NotifierImpl::Log(n) => n.send_terminal_tier(project_id).await,
            NotifierImpl::Webhook(n) => n.send_terminal_tier(project_id).await,
        }
    }
}
