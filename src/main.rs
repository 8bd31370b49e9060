#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tracing::info;
use std::sync::Arc;
use std::net::SocketAddr;
use callback_relay::{
    init_env, relay::{RelayClient, RelayDispatcher}, utils::logger, AppContext, BIND_ADDR, LOG_DIR,
};
use std::fs;

#[tokio::main]
async fn main() -> Result<()> {
    init_env();
    fs::create_dir_all(&*LOG_DIR)?;
    let _guard = logger::init(LOG_DIR.clone())?;

    info!("Starting callback relay service...");

    let dispatcher = RelayDispatcher::new(RelayClient::new());
    let ctx = Arc::new(AppContext {
        dispatcher: Arc::new(dispatcher),
    });

    let addr: SocketAddr = BIND_ADDR.parse()?;

    match callback_relay::web::start_server(ctx, addr).await {
        Ok(_) => info!("Server stopped gracefully"),
        Err(e) => {
            tracing::error!("Server error: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
