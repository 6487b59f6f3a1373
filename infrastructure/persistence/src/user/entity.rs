use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            UserId::new(self.id),
            self.first_name,
            self.last_name,
            self.email,
            self.password,
            self.created_at,
        )
    }
}
