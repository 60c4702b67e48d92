//! Runtime configuration from environment variables.

use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const BIND_ADDR_ENV: &str = "PARTDASH_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure instead of
    /// touching the process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = lookup(BIND_ADDR_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::debug!("{BIND_ADDR_ENV} not set; using {DEFAULT_BIND_ADDR}");
                DEFAULT_BIND_ADDR.to_string()
            });

        let bind_addr = raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_ENV}: invalid socket address {raw:?}"))?;

        Ok(Self { bind_addr })
    }
}
