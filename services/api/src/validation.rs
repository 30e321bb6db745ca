//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::error::FieldError;
use crate::models::RegisterRequest;

/// Validate display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }

    if name.len() > 64 {
        return Err("Name must be at most 64 characters long".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate a registration request, collecting every failed field
pub fn validate_registration(payload: &RegisterRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(message) = validate_name(&payload.name) {
        errors.push(FieldError::new("name", message));
    }
    if let Err(message) = validate_email(&payload.email) {
        errors.push(FieldError::new("email", message));
    }
    if let Err(message) = validate_password(&payload.password) {
        errors.push(FieldError::new("password", message));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate post content, collecting every failed field
pub fn validate_post_content(title: &str, body: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if body.trim().is_empty() {
        errors.push(FieldError::new("body", "Body is required"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
