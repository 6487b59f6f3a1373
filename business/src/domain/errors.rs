/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
    /// A conditional stock decrement matched no row: the product no longer
    /// holds enough units.
    #[error("repository.stock_conflict")]
    StockConflict(i64),
    /// A decrement targeted a product row that no longer exists.
    #[error("repository.missing_product")]
    MissingProduct(i64),
}
