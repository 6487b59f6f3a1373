use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty
            | ProductError::DescriptionEmpty
            | ProductError::PriceNotPositive
            | ProductError::NegativeQuantity => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = ProductError::PriceNotPositive.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "product.price_not_positive");
    }

    #[test]
    fn should_map_missing_product_to_not_found() {
        let (status, _) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
