//! Server configuration

use anyhow::{Context, Result};
use bookstore_core::ClientConfig;
use std::net::SocketAddr;

/// Listen address when `BOOKSTORE_WEB_ADDR` is unset
pub const DEFAULT_WEB_ADDR: &str = "127.0.0.1:3000";

/// Everything the page server reads from its environment
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address the page server binds to
    pub addr: SocketAddr,

    /// Settings for the catalog session behind the page
    pub client: ClientConfig,
}

impl WebConfig {
    /// Read `BOOKSTORE_WEB_ADDR` plus the client's own variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            addr: parse_addr(std::env::var("BOOKSTORE_WEB_ADDR").ok().as_deref())?,
            client: ClientConfig::from_env()?,
        })
    }
}

fn parse_addr(raw: Option<&str>) -> Result<SocketAddr> {
    let raw = raw.map(str::trim).unwrap_or(DEFAULT_WEB_ADDR);
    raw.parse()
        .with_context(|| format!("BOOKSTORE_WEB_ADDR must be a socket address, got {raw:?}"))
}
