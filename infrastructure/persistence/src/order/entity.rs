use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::order::model::{Order, OrderItem};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: i64,
    pub user_id: i64,
    pub total: BigDecimal,
    pub status: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Order {
        Order {
            id: self.id,
            user_id: UserId::new(self.user_id),
            total: self.total,
            status: self
                .status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Pending),
            address: self.address,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl OrderItemEntity {
    pub fn into_domain(self) -> OrderItem {
        OrderItem {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
            created_at: self.created_at,
        }
    }
}
