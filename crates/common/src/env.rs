//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Warn if the static assets directory is missing; the server still starts,
/// static requests will just 404.
pub async fn ensure_env(assets_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(assets_dir).await.is_err() {
        warn!(%assets_dir, "assets directory not found; static assets may 404");
    }
    Ok(())
}
