use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUser, RegistrationProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Registering user: {}", params.email));

        RegistrationProps {
            first_name: &params.first_name,
            last_name: &params.last_name,
            email: &params.email,
            password: &params.password,
        }
        .validate()?;

        if self.repository.get_by_email(&params.email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists);
        }

        let password_hash = self.hasher.hash(&params.password).await?;

        let user = self
            .repository
            .create(&NewUser::new(
                params.first_name,
                params.last_name,
                params.email,
                password_hash,
            ))
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration.
                RepositoryError::Duplicated => UserError::EmailAlreadyExists,
                other => UserError::Repository(other),
            })?;

        self.logger
            .info(&format!("User registered with id: {}", user.id));
        Ok(user)
    }
}
