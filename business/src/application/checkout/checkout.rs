use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CheckoutReceipt, OrderDraft};
use crate::domain::checkout::pricing::{
    cart_product_ids, check_stock, draft_items, index_products, inventory_deltas, total_price,
};
use crate::domain::checkout::repository::CheckoutRepository;
use crate::domain::checkout::services::ShippingAddressProvider;
use crate::domain::checkout::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::NewOrder;
use crate::domain::product::repository::ProductRepository;

/// Turns a cart into a pending order.
///
/// Everything up to the commit is read-only: quantities are checked, products
/// resolved in one batch, stock and prices computed from that snapshot. The
/// commit then decrements stock and writes the order in a single unit of work.
pub struct CheckoutUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub checkout_repository: Arc<dyn CheckoutRepository>,
    pub address_provider: Arc<dyn ShippingAddressProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutReceipt, CheckoutError> {
        self.logger.info(&format!(
            "Checkout requested by user {} with {} lines",
            params.user_id,
            params.items.len()
        ));

        // Input faults are reported before any storage access.
        if params.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let product_ids = cart_product_ids(&params.items)?;

        let products = index_products(self.product_repository.get_by_ids(&product_ids).await?);

        if let Err(e) = check_stock(&params.items, &products) {
            self.logger
                .warn(&format!("Checkout rejected for user {}: {}", params.user_id, e));
            return Err(e);
        }

        let total = total_price(&params.items, &products);
        let deltas = inventory_deltas(&params.items);
        let address = self.address_provider.address_for(&params.user_id).await?;

        let draft = OrderDraft {
            order: NewOrder::pending(params.user_id, total.clone(), address),
            items: draft_items(&params.items, &products),
        };

        let order_id = self
            .checkout_repository
            .commit_checkout(&draft, &deltas)
            .await
            .map_err(|e| match e {
                // Stock moved between validation and commit.
                RepositoryError::StockConflict(product_id) => {
                    let name = products
                        .get(&product_id)
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| product_id.to_string());
                    CheckoutError::InsufficientStock(name)
                }
                RepositoryError::MissingProduct(product_id) => {
                    CheckoutError::ProductUnavailable(product_id)
                }
                other => CheckoutError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Order {} created for user {} with total {}",
            order_id, params.user_id, total
        ));

        Ok(CheckoutReceipt {
            order_id,
            total_price: total,
        })
    }
}
