use async_trait::async_trait;
use tracing::{error, info};

use crate::relay::types::RelayTask;

/// Outcome sink for relay deliveries. Injected into the client so tests can
/// swap in capturing doubles.
#[async_trait]
pub trait RelayObserver: Send + Sync {
    async fn on_delivered(&self, task: &RelayTask, status: u16, body: &str);
    async fn on_failed(&self, task: &RelayTask, error: &str);
}

/// Production observer: records outcomes through `tracing`.
pub struct LogObserver;

#[async_trait]
impl RelayObserver for LogObserver {
    async fn on_delivered(&self, task: &RelayTask, status: u16, body: &str) {
        info!(
            callback_url = %task.callback_url,
            response = body,
            response_status = status,
            "Callback response sent successfully"
        );
    }

    async fn on_failed(&self, task: &RelayTask, error: &str) {
        error!(
            callback_url = %task.callback_url,
            error,
            "Error sending callback response"
        );
    }
}
