//! Input validation utilities for the service layer.

use crate::error::{Error, Result};

/// Validates email format using basic structural checks
///
/// # Arguments
/// * `email` - The email address to validate
///
/// # Returns
/// * `Ok(())` if the email is valid
/// * `Err(Error)` with descriptive message if invalid
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(Error::Validation("Email cannot be empty".to_string()));
    }

    if email.len() > 254 {
        return Err(Error::Validation(
            "Email address is too long (max 254 characters)".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(Error::Validation(
            "Invalid email format: must contain exactly one @ symbol".to_string(),
        ));
    }

    if email.contains(' ') || email.contains("..") {
        return Err(Error::Validation("Invalid email format".to_string()));
    }

    Ok(())
}

/// Validates password length requirements
///
/// # Arguments
/// * `password` - The password to validate
///
/// # Returns
/// * `Ok(())` if the password meets requirements
/// * `Err(Error)` with descriptive message if invalid
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < 6 {
        return Err(Error::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    if password.len() > 128 {
        return Err(Error::Validation(
            "Password is too long (max 128 characters)".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a string is not empty after trimming
///
/// # Arguments
/// * `input` - The input string to validate
/// * `field_name` - Name of the field for error messages
///
/// # Returns
/// * `Ok(String)` with the trimmed string
/// * `Err(Error)` if empty after trimming
pub fn validate_required_string(input: &str, field_name: &str) -> Result<String> {
    let trimmed = input.trim().to_string();

    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{} is required", field_name)));
    }

    Ok(trimmed)
}

/// Trims an optional string, collapsing empty results to `None`.
pub fn normalize_optional_string(input: Option<String>) -> Option<String> {
    input.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Validates UUID format
///
/// # Arguments
/// * `uuid_str` - The UUID string to validate
/// * `field_name` - Name of the field for error messages
///
/// # Returns
/// * `Ok(uuid::Uuid)` if valid
/// * `Err(Error)` with descriptive message if invalid
pub fn validate_uuid(uuid_str: &str, field_name: &str) -> Result<uuid::Uuid> {
    let uuid_str = uuid_str.trim();

    uuid::Uuid::parse_str(uuid_str)
        .map_err(|_| Error::Validation(format!("Invalid {}", field_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("test.email+tag@domain.co.uk").is_ok());
        assert!(validate_email("user_name@sub.domain.com").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("@domain.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@@domain.com").is_err());
        assert!(validate_email("user name@domain.com").is_err());
        assert!(validate_email("user@domain..com").is_err());
    }

    #[test]
    fn test_validate_password_valid() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("MySecureP@ssw0rd!").is_ok());
    }

    #[test]
    fn test_validate_password_invalid() {
        assert!(validate_password("").is_err());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("a".repeat(130).as_str()).is_err());
    }

    #[test]
    fn test_validate_required_string() {
        assert_eq!(
            validate_required_string("  Foo  ", "title").unwrap(),
            "Foo"
        );
        assert!(validate_required_string("", "title").is_err());
        assert!(validate_required_string("   ", "title").is_err());
    }

    #[test]
    fn test_normalize_optional_string() {
        assert_eq!(
            normalize_optional_string(Some("  hello  ".to_string())),
            Some("hello".to_string())
        );
        assert_eq!(normalize_optional_string(Some("   ".to_string())), None);
        assert_eq!(normalize_optional_string(Some(String::new())), None);
        assert_eq!(normalize_optional_string(None), None);
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("123e4567-e89b-12d3-a456-426614174000", "project id").is_ok());
        assert!(validate_uuid("not-a-uuid", "project id").is_err());
        assert!(validate_uuid("", "project id").is_err());
    }
}
