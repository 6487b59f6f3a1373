use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::user::model::{NewUser, User};
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::db::{database_error, is_unique_violation};

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT id, first_name, last_name, email, password, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            r#"INSERT INTO users (first_name, last_name, email, password, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, password, created_at"#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Duplicated
            } else {
                database_error(e)
            }
        })?;

        Ok(entity.into_domain())
    }
}
