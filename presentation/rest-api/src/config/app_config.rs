use super::{cors_config, jwt_config::JwtConfig, server_config::ServerConfig};
use persistence::address::DEFAULT_SHIPPING_ADDRESS;
use poem::middleware::Cors;
use std::env;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub jwt: JwtConfig,
    pub shipping_address: String,
}

impl AppConfig {
    /// Environment variables:
    /// - SHIPPING_ADDRESS: Address written on every new order (default: "some address")
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            jwt: JwtConfig::from_env()?,
            shipping_address: env::var("SHIPPING_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SHIPPING_ADDRESS.to_string()),
        })
    }
}
