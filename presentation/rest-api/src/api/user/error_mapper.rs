use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            UserError::FirstNameEmpty
            | UserError::LastNameEmpty
            | UserError::InvalidEmail
            | UserError::InvalidPasswordLength
            | UserError::EmailAlreadyExists => (StatusCode::BAD_REQUEST, "ValidationError"),
            UserError::InvalidCredentials => (StatusCode::NOT_FOUND, "NotFound"),
            UserError::PasswordHashing | UserError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
