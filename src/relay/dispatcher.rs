use tokio::time::{sleep, Duration};
use tracing::info;

use crate::relay::client::RelayClient;
use crate::relay::types::{RelayTask, RELAY_DELAY};

/// Schedules one delayed, fire-and-forget relay per accepted callback.
///
/// The spawned task is never joined: if the process exits during the delay
/// window the task is silently lost. There is no deduplication, cancellation,
/// or ordering across tasks.
pub struct RelayDispatcher {
    client: RelayClient,
    delay: Duration,
}

impl RelayDispatcher {
    pub fn new(client: RelayClient) -> Self {
        Self {
            client,
            delay: RELAY_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn schedule(&self, task: RelayTask) {
        info!(
            callback_url = %task.callback_url,
            tenant_id = ?task.tenant_id,
            correlation_id = ?task.correlation_id,
            "Relay scheduled"
        );

        let client = self.client.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            sleep(delay).await;
            client.relay(&task).await;
        });
    }
}
