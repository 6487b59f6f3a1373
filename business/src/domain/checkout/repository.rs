use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{InventoryDelta, OrderDraft};

/// Unit of work covering the write half of a checkout.
///
/// Implementations must apply every delta as a conditional decrement, insert
/// the order and its items, and make all of it visible at once. If a
/// decrement finds too little stock the whole commit is abandoned with
/// [`RepositoryError::StockConflict`] and nothing is written; a product row
/// that has disappeared since validation aborts it with
/// [`RepositoryError::MissingProduct`] instead.
#[async_trait]
pub trait CheckoutRepository: Send + Sync {
    async fn commit_checkout(
        &self,
        draft: &OrderDraft,
        deltas: &[InventoryDelta],
    ) -> Result<i64, RepositoryError>;
}
