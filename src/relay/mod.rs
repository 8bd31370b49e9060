pub mod types;
pub mod identifiers;
pub mod observer;
pub mod client;
pub mod dispatcher;

pub use types::{Identifiers, RelayPayload, RelayTask, RELAY_DELAY, RELAY_PAYLOAD_DATA};
pub use identifiers::extract_identifiers;
pub use observer::{LogObserver, RelayObserver};
pub use client::RelayClient;
pub use dispatcher::RelayDispatcher;
