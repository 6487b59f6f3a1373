use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, response) = match self {
            CheckoutError::InvalidQuantity(product_id)
            | CheckoutError::ProductUnavailable(product_id) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", &message).with_detail(product_id.to_string()),
            ),
            CheckoutError::InsufficientStock(product_name) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", &message).with_detail(product_name),
            ),
            CheckoutError::EmptyCart => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", &message),
            ),
            CheckoutError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("InternalError", &message),
            ),
        };

        (status, Json(response))
    }
}
