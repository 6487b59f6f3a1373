#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.first_name_empty")]
    FirstNameEmpty,
    #[error("user.last_name_empty")]
    LastNameEmpty,
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.invalid_password_length")]
    InvalidPasswordLength,
    #[error("user.email_already_exists")]
    EmailAlreadyExists,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.password_hashing_failed")]
    PasswordHashing,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
