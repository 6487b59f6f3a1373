use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderResponse;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
}

impl OrderApi {
    pub fn new(get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>) -> Self {
        Self { get_by_id_use_case }
    }
}

#[OpenApi]
impl OrderApi {
    /// Get one of the caller's orders
    ///
    /// Orders placed by other users are reported as not found.
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, auth: JwtBearer, id: Path<String>) -> GetOrderByIdResponse {
        let Ok(id) = id.0.parse::<i64>() else {
            return GetOrderByIdResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "order.invalid_id",
            )));
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams {
                id,
                user_id: auth.0,
            })
            .await
        {
            Ok(details) => GetOrderByIdResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderByIdResponse::NotFound(json),
                    _ => GetOrderByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderByIdResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
