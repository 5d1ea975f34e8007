use std::{env, net::SocketAddr};

/// Token the demo client ships with; override with `API_TOKEN`.
pub const DEFAULT_API_TOKEN: &str = "mysecrettoken";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_token: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3001);
        let api_token = env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string());
        if api_token.is_empty() {
            anyhow::bail!("API_TOKEN must not be empty");
        }
        Ok(Self {
            port,
            host,
            api_token,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(SocketAddr::from((
            self.host.parse::<std::net::IpAddr>()?,
            self.port,
        )))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            api_token: DEFAULT_API_TOKEN.to_string(),
        }
    }
}
