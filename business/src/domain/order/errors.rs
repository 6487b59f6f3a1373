#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
