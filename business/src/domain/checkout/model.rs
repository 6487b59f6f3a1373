use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::model::NewOrder;

/// One cart line as sent by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(product_id: i64, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Units to subtract from one product's stock. Applied only if the product
/// still holds at least `quantity` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryDelta {
    pub product_id: i64,
    pub quantity: i32,
}

/// An order line before the parent order has an id.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub product_id: i64,
    pub quantity: i32,
    pub price: BigDecimal,
}

/// Everything the ledger needs to persist one checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub order: NewOrder,
    pub items: Vec<DraftItem>,
}

/// Outcome returned to the caller of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub order_id: i64,
    pub total_price: BigDecimal,
}
