use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::OrderItem;
use business::domain::order::use_cases::get_by_id::OrderDetails;

use crate::api::price::decimal_to_f64;

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    pub id: i64,
    #[oai(rename = "productID")]
    pub product_id: i64,
    pub quantity: i32,
    /// Unit price at the time of checkout
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: decimal_to_f64(&item.price),
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: i64,
    pub total: f64,
    pub status: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderDetails> for OrderResponse {
    fn from(details: OrderDetails) -> Self {
        let order = details.order;
        Self {
            id: order.id,
            total: decimal_to_f64(&order.total),
            status: order.status.to_string(),
            address: order.address,
            created_at: order.created_at,
            items: details.items.into_iter().map(Into::into).collect(),
        }
    }
}
