use poem_openapi::Object;

use business::domain::checkout::model::{CartItem, CheckoutReceipt};

use crate::api::error::ErrorResponse;
use crate::api::price::try_decimal_to_f64;

#[derive(Debug, Clone, Object)]
pub struct CartItemRequest {
    #[oai(rename = "productID")]
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    pub items: Vec<CartItemRequest>,
}

impl From<CartItemRequest> for CartItem {
    fn from(item: CartItemRequest) -> Self {
        CartItem::new(item.product_id, item.quantity)
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    pub total_price: f64,
    pub order_id: i64,
}

impl TryFrom<CheckoutReceipt> for CheckoutResponse {
    type Error = ErrorResponse;

    fn try_from(receipt: CheckoutReceipt) -> Result<Self, Self::Error> {
        let total_price = try_decimal_to_f64(&receipt.total_price).ok_or_else(|| {
            tracing::error!(
                "Order {} total {} cannot be rendered as a JSON number",
                receipt.order_id,
                receipt.total_price
            );
            ErrorResponse::new("InternalError", "checkout.total_not_representable")
                .with_detail(receipt.order_id.to_string())
        })?;

        Ok(Self {
            total_price,
            order_id: receipt.order_id,
        })
    }
}
