use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use temperature_common::{env_flag, env_or};

use crate::models::ResponseShape;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub shape: ResponseShape,
    pub http: HttpConfig,
}

/// Middleware settings applied by the router.
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    pub cors: CorsConfig,
    /// Request body cap in bytes; `0` leaves bodies unbounded.
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub enabled: bool,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl ServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env_or("PORT", DEFAULT_PORT);
        let bind_addr = resolve_bind_addr(&host, port)?;

        let shape = if env_flag("ENVELOPE_RESPONSE", false) {
            ResponseShape::Envelope
        } else {
            ResponseShape::Identity
        };

        let cors = CorsConfig {
            enabled: env_flag("CORS_ENABLED", false),
            allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        };

        Ok(Self {
            bind_addr,
            shape,
            http: HttpConfig {
                cors,
                max_body_bytes: env_or("MAX_BODY_BYTES", 0usize),
            },
        })
    }
}

pub fn resolve_bind_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = host
        .trim()
        .parse()
        .with_context(|| format!("HOST must be an IP address, got {host:?}"))?;
    Ok(SocketAddr::new(ip, port))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
