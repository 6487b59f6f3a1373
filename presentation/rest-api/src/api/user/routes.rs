use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::login::{LoginUserParams, LoginUserUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::issue_token;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::config::jwt_config::JwtConfig;

pub struct UserApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUserUseCase>,
    jwt_config: JwtConfig,
}

impl UserApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUserUseCase>,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            jwt_config,
        }
    }
}

#[OpenApi]
impl UserApi {
    /// Register a new user
    #[oai(path = "/register", method = "post", tag = "ApiTags::Users")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterUserParams {
            first_name: body.0.first_name,
            last_name: body.0.last_name,
            email: body.0.email,
            password: body.0.password,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in
    ///
    /// Returns a signed token to send as `Authorization: Bearer <token>`.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Users")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginApiResponse {
        let params = LoginUserParams {
            email: body.0.email,
            password: body.0.password,
        };

        let user = match self.login_use_case.execute(params).await {
            Ok(user) => user,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    404 => LoginApiResponse::NotFound(json),
                    _ => LoginApiResponse::InternalError(json),
                };
            }
        };

        match issue_token(&self.jwt_config, user.id) {
            Ok(token) => LoginApiResponse::Ok(Json(LoginResponse {
                token,
                user: user.into(),
            })),
            Err(e) => LoginApiResponse::InternalError(Json(ErrorResponse::new(
                "InternalError",
                &e.to_string(),
            ))),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginApiResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
