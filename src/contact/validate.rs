use serde::Deserialize;

const MAX_FIELD_LEN: usize = 2000;

/// One contact form submission as posted by the public page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub details: String,
}

/// Field-level validation messages; `None` means the field is fine.
#[derive(Debug, Default)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
            && self.details.is_none()
    }
}

impl ContactSubmission {
    /// Check all fields. Character counts apply to the trimmed input.
    pub fn validate(&self) -> ContactErrors {
        ContactErrors {
            name: validate_min_chars(&self.name, "Name", 2),
            email: validate_email(&self.email),
            subject: validate_min_chars(&self.subject, "Subject", 5),
            message: validate_min_chars(&self.message, "Message", 10),
            details: validate_optional(&self.details, "Technical details"),
        }
    }
}

/// Validate a required text field: at least `min` characters, at most
/// MAX_FIELD_LEN, counted on the trimmed value.
pub fn validate_min_chars(value: &str, field_name: &str, min: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() < min {
        return Some(format!("{field_name} must be at least {min} characters"));
    }
    if trimmed.chars().count() > MAX_FIELD_LEN {
        return Some(format!("{field_name} must be at most {MAX_FIELD_LEN} characters"));
    }
    None
}

/// Validate an email: must contain '@' and '.', no whitespace, max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') || trimmed.contains(char::is_whitespace) {
        return Some("Email must be a valid address".to_string());
    }
    None
}

/// Validate an optional free-text field (empty is OK, length still capped).
pub fn validate_optional(value: &str, field_name: &str) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > MAX_FIELD_LEN {
        return Some(format!("{field_name} must be at most {MAX_FIELD_LEN} characters"));
    }
    None
}
