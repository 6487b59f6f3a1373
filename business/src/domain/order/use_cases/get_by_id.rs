use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderItem};
use crate::domain::shared::value_objects::UserId;

pub struct GetOrderByIdParams {
    pub id: i64,
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[async_trait]
pub trait GetOrderByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<OrderDetails, OrderError>;
}
