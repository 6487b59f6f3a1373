use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::checkout::use_cases::checkout::{CheckoutParams, CheckoutUseCase};

use crate::api::cart::dto::{CheckoutRequest, CheckoutResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CartApi {
    pub fn new(checkout_use_case: Arc<dyn CheckoutUseCase>) -> Self {
        Self { checkout_use_case }
    }
}

#[OpenApi]
impl CartApi {
    /// Check out a cart
    ///
    /// Validates every line against current stock, decrements inventory and
    /// records a pending order for the authenticated user. Replaying the same
    /// request places a second order.
    #[oai(path = "/cart/checkout", method = "post", tag = "ApiTags::Cart")]
    async fn checkout(&self, auth: JwtBearer, body: Json<CheckoutRequest>) -> CheckoutApiResponse {
        let params = CheckoutParams {
            user_id: auth.0,
            items: body.0.items.into_iter().map(Into::into).collect(),
        };

        match self.checkout_use_case.execute(params).await {
            Ok(receipt) => match CheckoutResponse::try_from(receipt) {
                Ok(response) => CheckoutApiResponse::Ok(Json(response)),
                Err(error) => CheckoutApiResponse::InternalError(Json(error)),
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutApiResponse::BadRequest(json),
                    _ => CheckoutApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutApiResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
