use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
}
