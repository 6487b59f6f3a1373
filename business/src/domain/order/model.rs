use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::value_objects::OrderStatus;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: UserId,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// One line of an order. `price` is the unit price captured at checkout
/// and never follows later catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub price: BigDecimal,
}

impl NewOrder {
    pub fn pending(user_id: UserId, total: BigDecimal, address: String) -> Self {
        Self {
            user_id,
            total,
            status: OrderStatus::Pending,
            address,
        }
    }
}

impl Order {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
