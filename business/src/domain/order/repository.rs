use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewOrder, NewOrderItem, Order, OrderItem};

/// Ledger port. Writes are independent single-record inserts; callers that
/// need an order and its items written together go through
/// [`CheckoutRepository`](crate::domain::checkout::repository::CheckoutRepository).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, order: &NewOrder) -> Result<i64, RepositoryError>;
    async fn create_order_item(&self, item: &NewOrderItem) -> Result<i64, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Order, RepositoryError>;
    async fn get_items(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError>;
}
