use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use business::domain::errors::RepositoryError;
use business::domain::order::model::{NewOrder, NewOrderItem, Order, OrderItem};
use business::domain::order::repository::OrderRepository;

use super::entity::{OrderEntity, OrderItemEntity};
use crate::db::database_error;

/// Inserts an order row on any connection, pooled or inside a transaction.
pub(crate) async fn insert_order(
    conn: &mut PgConnection,
    order: &NewOrder,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"INSERT INTO orders (user_id, total, status, address)
        VALUES ($1, $2, $3, $4)
        RETURNING id"#,
    )
    .bind(order.user_id.value())
    .bind(&order.total)
    .bind(order.status.to_string())
    .bind(&order.address)
    .fetch_one(conn)
    .await
}

pub(crate) async fn insert_order_item(
    conn: &mut PgConnection,
    item: &NewOrderItem,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"INSERT INTO order_items (order_id, product_id, quantity, price)
        VALUES ($1, $2, $3, $4)
        RETURNING id"#,
    )
    .bind(item.order_id)
    .bind(item.product_id)
    .bind(item.quantity)
    .bind(&item.price)
    .fetch_one(conn)
    .await
}

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_order(&self, order: &NewOrder) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(database_error)?;
        insert_order(&mut conn, order).await.map_err(database_error)
    }

    async fn create_order_item(&self, item: &NewOrderItem) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(database_error)?;
        insert_order_item(&mut conn, item).await.map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::NotFound,
            other => database_error(other),
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, user_id, total, status, address, created_at FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_items(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderItemEntity>(
            "SELECT id, order_id, product_id, quantity, price, created_at FROM order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
