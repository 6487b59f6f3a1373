use async_trait::async_trait;

use business::domain::checkout::services::ShippingAddressProvider;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

pub const DEFAULT_SHIPPING_ADDRESS: &str = "some address";

/// Returns the same configured address for every user.
///
/// There is no user address table yet; swap this adapter out once one exists.
pub struct StaticAddressProvider {
    address: String,
}

impl StaticAddressProvider {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Default for StaticAddressProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SHIPPING_ADDRESS)
    }
}

#[async_trait]
impl ShippingAddressProvider for StaticAddressProvider {
    async fn address_for(&self, _user_id: &UserId) -> Result<String, RepositoryError> {
        Ok(self.address.clone())
    }
}
