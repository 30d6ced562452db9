//! Outbound email seam

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Sends account emails. Delivery mechanics live behind this trait so the
/// rest of the service never touches a mail relay directly.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send an HTML message to a single recipient
    async fn send(&self, to: &str, html: &str) -> Result<()>;
}

/// Development mailer that writes the message to the log instead of
/// delivering it
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, html: &str) -> Result<()> {
        info!("Outgoing email to {to}: {html}");
        Ok(())
    }
}
