use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AppError;

/// JWT Claims 구조체
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (Member ID)
    pub sub: String,
    /// Issued At
    pub iat: usize,
    /// Expiration
    pub exp: usize,
    /// Token Type (access)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// JWT 토큰 생성 (Access Token)
pub fn encode_token(
    sub: String,
    secret: &str,
    expiration_seconds: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::seconds(expiration_seconds))
        .ok_or_else(|| AppError::InternalError("invalid token expiration".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        sub,
        iat: now.timestamp() as usize,
        exp: expiration,
        token_type: Some("access".to_string()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token creation failed: {}", e)))
}

/// JWT 토큰 검증
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let validation = Validation::default();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("토큰이 만료되었습니다.".into())
        }
        _ => AppError::Unauthorized("유효하지 않은 토큰입니다.".into()),
    })
}

/// Access Token 검증 (access 타입만 허용)
pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let claims = decode_token(token, secret)?;

    if claims.token_type.as_deref() != Some("access") {
        return Err(AppError::Unauthorized(
            "유효하지 않은 토큰 타입입니다.".into(),
        ));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode() {
        let secret = "test_secret";
        let sub = "42".to_string();
        let expiration = 3600;

        let token = encode_token(sub.clone(), secret, expiration).expect("Token generation failed");
        let claims = decode_access_token(&token, secret).expect("Token validation failed");

        assert_eq!(claims.sub, sub);
        assert_eq!(claims.token_type.as_deref(), Some("access"));
    }

    #[test]
    fn test_invalid_token() {
        let secret = "test_secret";
        let result = decode_token("invalid_token", secret);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = encode_token("1".to_string(), "secret_a", 3600).unwrap();
        let result = decode_access_token(&token, "secret_b");
        assert!(result.is_err());
    }
}
