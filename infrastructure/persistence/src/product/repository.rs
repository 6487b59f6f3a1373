use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::db::database_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, image, price, quantity, created_at FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, image, price, quantity, created_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, image, price, quantity, created_at FROM products WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, description, image, price, quantity, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, image, price, quantity, created_at"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image)
        .bind(&product.price)
        .bind(product.quantity)
        .bind(product.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products
            SET name = $1, description = $2, image = $3, price = $4, quantity = $5
            WHERE id = $6"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image)
        .bind(&product.price)
        .bind(product.quantity)
        .bind(product.id)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
