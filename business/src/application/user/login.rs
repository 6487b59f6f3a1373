use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::login::{LoginUserParams, LoginUserUseCase};

pub struct LoginUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUserUseCase for LoginUserUseCaseImpl {
    async fn execute(&self, params: LoginUserParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Login attempt for: {}", params.email));

        // Unknown email and wrong password are indistinguishable to the caller.
        let user = self
            .repository
            .get_by_email(&params.email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self
            .hasher
            .verify(&params.password, &user.password_hash)
            .await?
        {
            self.logger
                .warn(&format!("Invalid password for user {}", user.id));
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}
