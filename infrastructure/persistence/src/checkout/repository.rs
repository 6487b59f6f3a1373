use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::checkout::model::{InventoryDelta, OrderDraft};
use business::domain::checkout::repository::CheckoutRepository;
use business::domain::errors::RepositoryError;
use business::domain::order::model::NewOrderItem;

use crate::db::database_error;
use crate::order::repository::{insert_order, insert_order_item};

/// Commits a checkout in one transaction.
///
/// Each delta is a conditional decrement; if any of them matches no row the
/// transaction is rolled back, so a failed checkout never leaves stock
/// decremented or a partial order behind.
pub struct CheckoutRepositoryPostgres {
    pool: PgPool,
}

impl CheckoutRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckoutRepository for CheckoutRepositoryPostgres {
    async fn commit_checkout(
        &self,
        draft: &OrderDraft,
        deltas: &[InventoryDelta],
    ) -> Result<i64, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        for delta in deltas {
            let result = sqlx::query(
                "UPDATE products SET quantity = quantity - $1 WHERE id = $2 AND quantity >= $1",
            )
            .bind(delta.quantity)
            .bind(delta.product_id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

            if result.rows_affected() == 0 {
                let exists = sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)",
                )
                .bind(delta.product_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(database_error)?;

                tx.rollback().await.map_err(database_error)?;
                return Err(if exists {
                    RepositoryError::StockConflict(delta.product_id)
                } else {
                    RepositoryError::MissingProduct(delta.product_id)
                });
            }
        }

        let order_id = insert_order(&mut tx, &draft.order)
            .await
            .map_err(database_error)?;

        for item in &draft.items {
            insert_order_item(
                &mut tx,
                &NewOrderItem {
                    order_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: item.price.clone(),
                },
            )
            .await
            .map_err(database_error)?;
        }

        tx.commit().await.map_err(database_error)?;

        tracing::debug!(
            "Committed order {order_id} with {} inventory deltas",
            deltas.len()
        );
        Ok(order_id)
    }
}
