use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

fn not_found_or_repository(e: RepositoryError) -> ProductError {
    match e {
        RepositoryError::NotFound => ProductError::NotFound,
        other => ProductError::Repository(other),
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(not_found_or_repository)?;

        let updated_product = existing.replace(NewProductProps {
            name: params.name,
            description: params.description,
            image: params.image,
            price: params.price,
            quantity: params.quantity,
        })?;

        self.repository
            .update(&updated_product)
            .await
            .map_err(not_found_or_repository)?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
