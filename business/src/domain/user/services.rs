use async_trait::async_trait;

use super::errors::UserError;

/// Service port for one-way password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, UserError>;
    /// Returns `Ok(false)` on mismatch; errors are reserved for unreadable hashes.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, UserError>;
}
