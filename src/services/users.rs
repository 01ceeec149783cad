use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::{
        requests::{LoginRequest, RegisterRequest},
        users::{NewUser, User},
    },
    queries::users,
    validation,
};

/// Registers a new user with input validation and password hashing.
pub async fn register_user(conn: &mut DbConn, request: RegisterRequest) -> Result<User> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(Error::Validation(
            "Email and password are required".to_string(),
        ));
    }

    validation::validate_email(&request.email)?;
    validation::validate_password(&request.password)?;

    let password_hash = hash_password(&request.password)?;

    let new_user = NewUser {
        email: request.email,
        password_hash,
    };

    // The unique index on email turns a duplicate into a validation error
    let user = users::create_user(conn, new_user).await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(user)
}

/// Authenticates a user by email and password.
///
/// Unknown email and wrong password produce the same error, so a caller
/// cannot probe which addresses are registered.
pub async fn login_user(conn: &mut DbConn, request: LoginRequest) -> Result<User> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(Error::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let user = users::get_user_by_email(conn, &request.email)
        .await?
        .ok_or_else(|| Error::Authentication("Invalid email or password".to_string()))?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(Error::Authentication(
            "Invalid email or password".to_string(),
        ));
    }

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(user)
}

/// Hashes a password using Argon2 with a random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against a password hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| Error::Internal(format!("Invalid password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_produces_verifiable_hash() {
        let hash = hash_password("secret1").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("secret1", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hash_password_is_salted() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(verify_password("secret1", "not-a-hash").is_err());
    }
}
