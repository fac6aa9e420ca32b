//! Server configuration from environment variables.

use oncograph_common::error::{OncographError, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Load the three-patient demo dataset at startup.
    pub seed_demo: bool,
}

impl ServerConfig {
    /// Read `ONCOGRAPH_HOST`, `ONCOGRAPH_PORT`, and
    /// `ONCOGRAPH_SEED_DEMO`, falling back to coded defaults.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("ONCOGRAPH_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("ONCOGRAPH_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                OncographError::Config(format!("ONCOGRAPH_PORT is not a valid port: {raw}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };
        let seed_demo = std::env::var("ONCOGRAPH_SEED_DEMO")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self { host, port, seed_demo })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
