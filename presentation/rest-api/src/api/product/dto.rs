use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

use crate::api::price::decimal_to_f64;

#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description (cannot be empty)
    pub description: String,
    /// Image URL
    #[oai(default)]
    pub image: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Units in stock
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            price: decimal_to_f64(&product.price),
            name: product.name,
            description: product.description,
            image: product.image,
            quantity: product.quantity,
            created_at: product.created_at,
        }
    }
}
