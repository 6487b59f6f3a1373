use anyhow::Context;
use std::env;

const DEFAULT_EXPIRATION_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Signing settings for the HS256 tokens handed out at login.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_seconds: u64,
}

impl JwtConfig {
    /// Environment variables:
    /// - JWT_SECRET: HMAC secret (required)
    /// - JWT_EXPIRATION_SECONDS: Token lifetime (default: 604800, one week)
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let expiration_seconds = match env::var("JWT_EXPIRATION_SECONDS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("JWT_EXPIRATION_SECONDS must be a number of seconds")?,
            Err(_) => DEFAULT_EXPIRATION_SECONDS,
        };

        Ok(Self {
            secret,
            expiration_seconds,
        })
    }
}
