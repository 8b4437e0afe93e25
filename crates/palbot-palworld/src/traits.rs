//! The status query seam consumed by the command dispatcher.

use crate::models::{PlayerList, ServerMetrics};
use async_trait::async_trait;
use palbot_common::Result;

/// Source of server status, implemented by [`crate::PalworldClient`].
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the current server metrics.
    async fn fetch_metrics(&self) -> Result<ServerMetrics>;

    /// Fetches the list of online players.
    async fn fetch_players(&self) -> Result<PlayerList>;
}
