use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Between 8 and 16 characters
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LoginResponse {
    /// Bearer token for authenticated endpoints
    pub token: String,
    pub user: UserResponse,
}
