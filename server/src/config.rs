//! Host process configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': expected an integer in 1..=65535")]
    InvalidPort { value: String },
    #[error("invalid BIND_ADDR '{value}': expected an IP address")]
    InvalidBindAddr { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_BIND_ADDR);
    };
    raw.trim()
        .parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidBindAddr { value: raw.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
