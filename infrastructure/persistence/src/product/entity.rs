use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.image,
            self.price,
            self.quantity,
            self.created_at,
        )
    }
}
