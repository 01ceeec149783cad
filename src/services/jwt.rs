use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user_id as string
    pub sub: String,
    /// Email of the token holder
    pub email: String,
    /// Expiration time as Unix timestamp
    pub exp: i64,
    /// Issued at time as Unix timestamp
    pub iat: i64,
}

/// Generates a signed JWT for a user.
///
/// # Arguments
/// * `user_id` - The user's UUID
/// * `email` - The user's email, embedded in the claims
/// * `secret` - The JWT secret key for signing
/// * `expiration_minutes` - Token lifetime in minutes (from config)
pub fn generate_jwt(
    user_id: Uuid,
    email: &str,
    secret: &str,
    expiration_minutes: i64,
) -> Result<String> {
    let now = Utc::now();
    let expiration = now + Duration::minutes(expiration_minutes);

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expiration.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| Error::Internal(format!("Failed to generate JWT: {}", e)))
}

/// Verifies a JWT and returns the claims if valid.
///
/// # Errors
/// Returns `Error::Authentication` if the token is malformed, expired, or
/// has a bad signature. Callers cannot distinguish the cases.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| {
        let error_msg = e.to_string().to_lowercase();
        if error_msg.contains("expired") {
            Error::Authentication("Token has expired".to_string())
        } else if error_msg.contains("signature") {
            Error::Authentication("Invalid token signature".to_string())
        } else {
            Error::Authentication(format!("Invalid token: {}", e))
        }
    })?;

    Ok(token_data.claims)
}

/// Validates the bearer credential from an Authorization header and returns
/// the identity it carries.
/// Format: "Authorization: Bearer <token>"
pub fn authenticate_bearer(auth_header: Option<&str>, secret: &str) -> Result<(Uuid, String)> {
    let token = extract_token_from_header(auth_header)?;
    let claims = verify_jwt(&token, secret)?;
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| Error::Authentication("Invalid user id in token".to_string()))?;

    Ok((user_id, claims.email))
}

/// Extracts the Bearer token from the Authorization header
fn extract_token_from_header(auth_header: Option<&str>) -> Result<String> {
    match auth_header {
        Some(header) if header.starts_with("Bearer ") => {
            let token = header[7..].to_string();
            if token.is_empty() {
                return Err(Error::Authentication("Empty token".to_string()));
            }
            Ok(token)
        }
        Some(_) => Err(Error::Authentication(
            "Invalid Authorization header format. Expected: 'Bearer <token>'".to_string(),
        )),
        None => Err(Error::Authentication(
            "Missing Authorization header".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing";

    #[test]
    fn test_generate_jwt() {
        let user_id = Uuid::now_v7();
        let token = generate_jwt(user_id, "user@example.com", SECRET, 15).unwrap();
        assert!(!token.is_empty());
        assert!(token.contains('.'));
    }

    #[test]
    fn test_verify_jwt_valid() {
        let user_id = Uuid::now_v7();
        let token = generate_jwt(user_id, "user@example.com", SECRET, 15).unwrap();
        let claims = verify_jwt(&token, SECRET).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn test_verify_jwt_invalid_signature() {
        let user_id = Uuid::now_v7();
        let token = generate_jwt(user_id, "user@example.com", SECRET, 15).unwrap();
        assert!(verify_jwt(&token, "wrong-secret").is_err());
    }

    #[test]
    fn test_verify_jwt_invalid_format() {
        assert!(verify_jwt("invalid.token.here", SECRET).is_err());
    }

    #[test]
    fn test_verify_jwt_expired() {
        let user_id = Uuid::now_v7();
        // Issued far enough in the past to be outside the default leeway
        let token = generate_jwt(user_id, "user@example.com", SECRET, -10).unwrap();
        assert!(verify_jwt(&token, SECRET).is_err());
    }

    #[test]
    fn test_authenticate_bearer_round_trip() {
        let user_id = Uuid::now_v7();
        let token = generate_jwt(user_id, "user@example.com", SECRET, 15).unwrap();
        let header = format!("Bearer {}", token);
        let (extracted_id, email) = authenticate_bearer(Some(&header), SECRET).unwrap();
        assert_eq!(extracted_id, user_id);
        assert_eq!(email, "user@example.com");
    }

    #[test]
    fn test_extract_token_from_header_valid() {
        let extracted = extract_token_from_header(Some("Bearer my-jwt-token")).unwrap();
        assert_eq!(extracted, "my-jwt-token");
    }

    #[test]
    fn test_extract_token_from_header_missing() {
        assert!(extract_token_from_header(None).is_err());
    }

    #[test]
    fn test_extract_token_from_header_invalid_format() {
        assert!(extract_token_from_header(Some("Basic dXNlcjpwYXNz")).is_err());
    }

    #[test]
    fn test_extract_token_from_header_empty() {
        assert!(extract_token_from_header(Some("Bearer ")).is_err());
    }
}
