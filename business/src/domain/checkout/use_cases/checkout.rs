use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CartItem, CheckoutReceipt};
use crate::domain::shared::value_objects::UserId;

pub struct CheckoutParams {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutReceipt, CheckoutError>;
}
