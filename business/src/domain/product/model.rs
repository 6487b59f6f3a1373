use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

use super::errors::ProductError;

/// A catalog entry as persisted in the `products` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

fn validate(props: &NewProductProps) -> Result<(), ProductError> {
    if props.name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }

    if props.description.trim().is_empty() {
        return Err(ProductError::DescriptionEmpty);
    }

    if props.price <= BigDecimal::zero() {
        return Err(ProductError::PriceNotPositive);
    }

    if props.quantity < 0 {
        return Err(ProductError::NegativeQuantity);
    }

    Ok(())
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props)?;

        Ok(Self {
            name: props.name,
            description: props.description,
            image: props.image,
            price: props.price,
            quantity: props.quantity,
            created_at: Utc::now(),
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        name: String,
        description: String,
        image: String,
        price: BigDecimal,
        quantity: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image,
            price,
            quantity,
            created_at,
        }
    }

    /// Full-record replace: every mutable field comes from `props`,
    /// identity and creation time are kept.
    pub fn replace(&self, props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props)?;

        Ok(Self {
            id: self.id,
            name: props.name,
            description: props.description,
            image: props.image,
            price: props.price,
            quantity: props.quantity,
            created_at: self.created_at,
        })
    }

    /// `requested` is the total asked for across a cart, so it may exceed
    /// the range of a single line quantity.
    pub fn has_stock_for(&self, requested: i64) -> bool {
        requested <= i64::from(self.quantity)
    }
}
