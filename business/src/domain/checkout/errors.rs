/// Failures surfaced by the checkout workflow. Only the first problem found
/// is reported.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.invalid_quantity")]
    InvalidQuantity(i64),
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.product_unavailable")]
    ProductUnavailable(i64),
    #[error("checkout.insufficient_stock")]
    InsufficientStock(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
