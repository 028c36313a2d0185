//! Log-only notifier
//!
//! Used until a mail relay is configured.

use async_trait::async_trait;

use crate::domain::entities::ProjectId;
use crate::domain::ports::Notifier;
use crate::error::NotifyError;

/// Notifier that writes notices to the log and never fails
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_level_up(&self, email: &str, level: i32) -> Result<(), NotifyError> {
        tracing::info!(email = %email, level, "Level-up notice (log only)");
        Ok(())
    }

    async fn send_terminal_tier(&self, project_id: &ProjectId) -> Result<(), NotifyError> {
        tracing::info!(project_id = %project_id, "Sandbox notice for operations team (log only)");
        Ok(())
    }
}
