use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Service port resolving where an order ships to.
#[async_trait]
pub trait ShippingAddressProvider: Send + Sync {
    async fn address_for(&self, user_id: &UserId) -> Result<String, RepositoryError>;
}
