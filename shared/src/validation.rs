//! Input validation functions
//!
//! Validation helpers shared by the backend services. Request-shape
//! validation (required fields, types) is handled by serde at the boundary;
//! these cover value ranges and formats.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 150 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if password.len() > 120 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a non-negative count value (steps, water, sets, reps)
pub fn validate_non_negative(value: i32, field: &str) -> Result<(), String> {
    if value < 0 {
        return Err(format!("{} cannot be negative", field));
    }
    Ok(())
}

/// Validate sleep hours for a single day
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Sleep hours must be a valid number".to_string());
    }
    if !(0.0..=24.0).contains(&hours) {
        return Err("Sleep hours must be between 0 and 24".to_string());
    }
    Ok(())
}
