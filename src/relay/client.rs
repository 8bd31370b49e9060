use std::sync::Arc;

use crate::relay::observer::{LogObserver, RelayObserver};
use crate::relay::types::{RelayPayload, RelayTask};

/// Performs the single outbound POST for a relay task. Delivery failure is
/// terminal: it is reported to the observer and swallowed, never retried.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    observer: Arc<dyn RelayObserver>,
}

impl RelayClient {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(LogObserver))
    }

    pub fn with_observer(observer: Arc<dyn RelayObserver>) -> Self {
        Self {
            http: reqwest::Client::new(),
            observer,
        }
    }

    pub async fn relay(&self, task: &RelayTask) {
        let result = self
            .http
            .post(&task.callback_url)
            .json(&RelayPayload::default())
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => self.observer.on_delivered(task, status, &body).await,
                    Err(e) => self.observer.on_failed(task, &e.to_string()).await,
                }
            }
            Err(e) => self.observer.on_failed(task, &e.to_string()).await,
        }
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new()
    }
}
