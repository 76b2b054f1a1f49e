//! # divindex lib

use std::{env, sync::LazyLock};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

pub mod api;
pub mod error;
pub mod utils;

mod data;
mod ds;
mod financial;
mod ticker;

/// Trailing window of one calendar year ending at the as-of date
pub static LOOKBACK_DAYS: i64 = 365;

#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    pub gateway_api: String,
    pub gateway_user: String,
    pub gateway_password: String,
    pub index_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway_api: "http://127.0.0.1:8005".to_string(),
            gateway_user: "anonymous".to_string(),
            gateway_password: "123456".to_string(),
            index_symbol: "hs300".to_string(),
        }
    }
}

pub static CONFIG: LazyLock<RwLock<Config>> =
    LazyLock::new(|| RwLock::new(confy::load(env!("CARGO_PKG_NAME"), None).unwrap_or_default()));

pub fn init() {
    env_logger::Builder::new()
        .parse_filters(env::var("LOG").as_deref().unwrap_or("off"))
        .init();
}
