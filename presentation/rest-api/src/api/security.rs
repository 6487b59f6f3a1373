use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use business::domain::shared::value_objects::UserId;

use crate::config::jwt_config::JwtConfig;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("auth.token_encoding_failed")]
    Encoding,
    #[error("auth.token_validation_failed")]
    Invalid,
    #[error("auth.invalid_subject")]
    InvalidSubject,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: u64,
    exp: u64,
}

fn now_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Signs an HS256 token whose subject is the user id.
pub fn issue_token(config: &JwtConfig, user_id: UserId) -> Result<String, TokenError> {
    let iat = now_seconds();
    let claims = Claims {
        sub: user_id.to_string(),
        iat,
        exp: iat + config.expiration_seconds,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign token: {e}");
        TokenError::Encoding
    })
}

pub fn verify_token(config: &JwtConfig, token: &str) -> Result<UserId, TokenError> {
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|_| TokenError::Invalid)?;

    token_data
        .claims
        .sub
        .parse::<i64>()
        .map(UserId::new)
        .map_err(|_| TokenError::InvalidSubject)
}

/// Bearer token issued by `POST /login`
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub UserId);

async fn jwt_bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<UserId> {
    let Some(config) = req.data::<JwtConfig>() else {
        tracing::error!("JWT configuration missing from request data");
        return None;
    };

    match verify_token(config, &bearer.token) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            expiration_seconds: 3600,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn should_accept_token_it_issued() {
        let config = config("secret");

        let token = issue_token(&config, UserId::new(42)).unwrap();

        assert_eq!(verify_token(&config, &token).unwrap(), UserId::new(42));
    }

    #[test]
    fn should_reject_token_signed_with_another_secret() {
        let token = issue_token(&config("other"), UserId::new(42)).unwrap();

        let result = verify_token(&config("secret"), &token);

        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn should_reject_expired_token() {
        let now = now_seconds();
        let token = sign(
            &Claims {
                sub: "42".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            },
            "secret",
        );

        let result = verify_token(&config("secret"), &token);

        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn should_reject_token_when_header_is_malformed() {
        let result = verify_token(&config("secret"), "not-a-jwt");

        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn should_reject_non_numeric_subject() {
        let now = now_seconds();
        let token = sign(
            &Claims {
                sub: "someone".to_string(),
                iat: now,
                exp: now + 3600,
            },
            "secret",
        );

        let result = verify_token(&config("secret"), &token);

        assert!(matches!(result, Err(TokenError::InvalidSubject)));
    }
}
