use std::net::{AddrParseError, IpAddr, SocketAddr};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The single origin allowed to make credentialed cross-origin requests.
    pub allowed_origin: String,
}

impl ServerConfig {
    /// Accepts IPv4 and IPv6 literals for `host`; hostnames are not resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}
