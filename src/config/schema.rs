//! Bind configuration schema.
//!
//! The launcher carries exactly one configuration entity: the interface and
//! port the hosted server binds to. It is created once at startup and read-only
//! for the rest of the process lifetime.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigError;

/// Network bind parameters for the hosted server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BindConfig {
    /// Interface address to listen on (e.g., "0.0.0.0" for all interfaces).
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
        }
    }
}

impl BindConfig {
    /// Validated socket address for the bind call.
    ///
    /// Fails if the host is not a parseable interface address, so a bad value
    /// is rejected before any bind attempt.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidHost {
            value: self.host.clone(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
