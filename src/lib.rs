pub mod relay;
pub mod utils;
pub mod web;

use std::env;
use std::sync::Arc;
use once_cell::sync::Lazy;
use relay::RelayDispatcher;

pub struct AppContext {
    pub dispatcher: Arc<RelayDispatcher>,
}

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_LOG_DIR: &str = "./logs";

pub static BIND_ADDR: Lazy<String> = Lazy::new(|| {
    match env::var("RELAY_BIND_ADDR") {
        Ok(addr) => addr,
        Err(_) => {
            dotenv::var("RELAY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        }
    }
});

pub static LOG_DIR: Lazy<String> = Lazy::new(|| {
    match env::var("RELAY_LOG_DIR") {
        Ok(dir) => dir,
        Err(_) => {
            dotenv::var("RELAY_LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string())
        }
    }
});

pub fn init_env() {
    dotenv::dotenv().ok();
}
