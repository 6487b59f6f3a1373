use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_id::{
    GetOrderByIdParams, GetOrderByIdUseCase, OrderDetails,
};

pub struct GetOrderByIdUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<OrderDetails, OrderError> {
        self.logger.info(&format!(
            "Fetching order {} for user {}",
            params.id, params.user_id
        ));

        let order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        // Orders of other users are reported as missing.
        if !order.is_owned_by(&params.user_id) {
            return Err(OrderError::NotFound);
        }

        let items = self.repository.get_items(order.id).await?;

        Ok(OrderDetails { order, items })
    }
}
