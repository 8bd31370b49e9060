use serde::Serialize;
use tokio::time::Duration;

/// Wait between accepting a callback and relaying to its URL.
pub const RELAY_DELAY: Duration = Duration::from_millis(5000);

pub const RELAY_PAYLOAD_DATA: &str = "QA Testing - RM";

/// Body of every outbound relay POST.
#[derive(Debug, Serialize)]
pub struct RelayPayload {
    pub data: &'static str,
}

impl Default for RelayPayload {
    fn default() -> Self {
        Self { data: RELAY_PAYLOAD_DATA }
    }
}

/// One accepted callback, carried from acceptance to delivery. Owned by the
/// spawned relay task; nothing survives it.
#[derive(Debug, Clone, Serialize)]
pub struct RelayTask {
    pub callback_url: String,
    pub tenant_id: Option<String>,
    pub correlation_id: Option<String>,
}

impl RelayTask {
    pub fn new(callback_url: impl Into<String>, ids: Identifiers) -> Self {
        Self {
            callback_url: callback_url.into(),
            tenant_id: ids.tenant_id,
            correlation_id: ids.correlation_id,
        }
    }
}

/// Identifiers positionally extracted from a callback URL path. Either may be
/// absent when the path is short; that is tolerated everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifiers {
    pub tenant_id: Option<String>,
    pub correlation_id: Option<String>,
}
