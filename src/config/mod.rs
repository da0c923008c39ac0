use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::utils::error::AppError;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::SecurityHeadersLayer;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// JSON file the store is pre-seeded from at startup.
    pub seed_file: Option<PathBuf>,
    /// Serve the GraphiQL IDE on `GET /graphql`.
    pub graphiql: bool,
    pub production: bool,
    pub cors_allowed_origins: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(host) => host
                .parse()
                .map_err(|_| AppError::Config(format!("HOST '{}' is not an IP address", host)))?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| AppError::Config(format!("PORT '{}' is not a port number", port)))?,
            None => DEFAULT_PORT,
        };

        let graphiql = match lookup("GRAPHIQL") {
            Some(value) => parse_bool("GRAPHIQL", &value)?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            seed_file: lookup("SEED_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            graphiql,
            production: lookup("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS"),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{} '{}' is not a boolean",
            key, value
        ))),
    }
}
