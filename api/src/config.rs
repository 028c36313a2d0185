use std::env;

use anyhow::Context;

/// Bot application id used when `DISCORD_CLIENT_ID` is unset or empty
pub const DEFAULT_DISCORD_CLIENT_ID: &str = "1361285493521907832";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Discord application id for the bot authorization link
    pub discord_client_id: String,
    /// Endpoint receiving level-up notices; notices are only logged when unset
    pub notify_webhook_url: Option<String>,
    /// Key for signing outbound notices (HMAC-SHA256)
    pub notify_webhook_secret: Option<String>,
    /// Key the ingestion bot signs project snapshots with; snapshot checks
    /// are refused when unset
    pub ingest_webhook_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            discord_client_id: non_empty_var("DISCORD_CLIENT_ID")
                .unwrap_or_else(|| DEFAULT_DISCORD_CLIENT_ID.to_string()),
            notify_webhook_url: non_empty_var("NOTIFY_WEBHOOK_URL"),
            notify_webhook_secret: non_empty_var("NOTIFY_WEBHOOK_SECRET"),
            ingest_webhook_secret: non_empty_var("INGEST_WEBHOOK_SECRET"),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
