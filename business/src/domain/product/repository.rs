use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

/// Catalog port. Updates replace the whole record; there is no partial update.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Returns only the products that exist; missing ids are simply absent.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError>;
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
}
