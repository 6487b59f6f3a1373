use std::collections::{BTreeMap, HashMap};

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::CheckoutError;
use super::model::{CartItem, DraftItem, InventoryDelta};
use crate::domain::product::model::Product;

/// Collects the product ids referenced by the cart.
///
/// Fails on the first line whose quantity is not strictly positive.
pub fn cart_product_ids(items: &[CartItem]) -> Result<Vec<i64>, CheckoutError> {
    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity <= 0 {
            return Err(CheckoutError::InvalidQuantity(item.product_id));
        }
        ids.push(item.product_id);
    }
    Ok(ids)
}

/// Indexes resolved products by id.
pub fn index_products(products: Vec<Product>) -> HashMap<i64, Product> {
    products.into_iter().map(|p| (p.id, p)).collect()
}

/// Read-only pass confirming every cart line can be served.
///
/// Lines referencing the same product are checked against the running sum
/// of what the cart asks for that product.
pub fn check_stock(
    items: &[CartItem],
    products: &HashMap<i64, Product>,
) -> Result<(), CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut requested: HashMap<i64, i64> = HashMap::new();
    for item in items {
        let product = products
            .get(&item.product_id)
            .ok_or(CheckoutError::ProductUnavailable(item.product_id))?;

        let running = requested.entry(item.product_id).or_insert(0);
        *running += i64::from(item.quantity);

        if !product.has_stock_for(*running) {
            return Err(CheckoutError::InsufficientStock(product.name.clone()));
        }
    }

    Ok(())
}

/// Sum of current unit price times requested quantity over all lines.
///
/// Lines whose product is missing contribute nothing; call after
/// [`check_stock`].
pub fn total_price(items: &[CartItem], products: &HashMap<i64, Product>) -> BigDecimal {
    items
        .iter()
        .filter_map(|item| {
            products
                .get(&item.product_id)
                .map(|p| &p.price * BigDecimal::from(item.quantity))
        })
        .fold(BigDecimal::zero(), |acc, line| acc + line)
}

/// One delta per distinct product, ordered by product id so concurrent
/// commits touch rows in the same order.
pub fn inventory_deltas(items: &[CartItem]) -> Vec<InventoryDelta> {
    let mut per_product: BTreeMap<i64, i32> = BTreeMap::new();
    for item in items {
        let entry = per_product.entry(item.product_id).or_insert(0);
        *entry = entry.saturating_add(item.quantity);
    }

    per_product
        .into_iter()
        .map(|(product_id, quantity)| InventoryDelta {
            product_id,
            quantity,
        })
        .collect()
}

/// One draft line per cart line, priced with the snapshot taken from
/// `products`.
pub fn draft_items(items: &[CartItem], products: &HashMap<i64, Product>) -> Vec<DraftItem> {
    items
        .iter()
        .filter_map(|item| {
            products.get(&item.product_id).map(|p| DraftItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price: p.price.clone(),
            })
        })
        .collect()
}
