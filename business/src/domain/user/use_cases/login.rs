use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct LoginUserParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, params: LoginUserParams) -> Result<User, UserError>;
}
