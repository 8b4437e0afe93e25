//! Outbound side of the chat platform.

use async_trait::async_trait;
use palbot_common::{ChatTarget, Result};

/// Delivers text to a chat target.
///
/// Failures are reported to the caller, which logs them; a failed send is
/// never retried.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends `text` to `target`.
    async fn send(&self, target: &ChatTarget, text: &str) -> Result<()>;
}
