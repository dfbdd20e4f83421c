use crate::config::{MIN_MESSAGE_LEN, MIN_NAME_LEN};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// local@domain.tld: no whitespace, a single '@', dot-separated non-empty
// domain labels.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").unwrap());

/// Contact form fields, keyed by their `name` attribute in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// A single field that failed validation, with the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.name(), self.message)
    }
}

impl std::error::Error for FieldError {}

/// Shared minimum-length rule on the trimmed input.
fn validate_min_len(input: &str, min: usize, field_name: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", field_name));
    }
    if trimmed.chars().count() < min {
        return Err(format!(
            "{} must be at least {} characters",
            field_name, min
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate the sender name
pub fn validate_name(input: &str) -> Result<String, String> {
    validate_min_len(input, MIN_NAME_LEN, "Name")
}

/// Validate the reply-to address
pub fn validate_email(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Email is required".to_string());
    }
    if !EMAIL_REGEX.is_match(trimmed) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validate the message body
pub fn validate_message(input: &str) -> Result<String, String> {
    validate_min_len(input, MIN_MESSAGE_LEN, "Message")
}

pub fn validate_field(field: Field, value: &str) -> Result<String, FieldError> {
    let result = match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
    };
    result.map_err(|message| FieldError { field, message })
}

/// The first form field with no element among `present`, if any.
pub fn missing_field(present: &[Field]) -> Option<Field> {
    Field::ALL.into_iter().find(|field| !present.contains(field))
}

/// Raw values from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Every failing field, in form order. Empty means the form can be sent.
    pub fn validate(&self) -> Vec<FieldError> {
        Field::ALL
            .iter()
            .filter_map(|&field| validate_field(field, self.value(field)).err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn short_fields_and_bad_email_are_reported() {
        let errors = submission("Al", "bad", "short").validate();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Message]);
    }

    #[test]
    fn valid_submission_has_no_errors() {
        assert!(submission("Alice", "a@b.com", "This is long enough.")
            .validate()
            .is_empty());
    }

    #[test]
    fn name_is_measured_after_trimming() {
        assert!(validate_name("  A  ").is_err());
        assert_eq!(validate_name("  Al "), Ok("Al".to_string()));
        assert_eq!(validate_name("   "), Err("Name is required".to_string()));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(validate_name("Zoë").is_ok());
        assert!(validate_name("é").is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email(" first.last@mail.example.org ").is_ok());
        assert!(validate_email("bad").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a@.com").is_err());
        assert!(validate_email("a b@c.com").is_err());
        assert!(validate_email("a@@b.com").is_err());
        assert!(validate_email("@b.com").is_err());
    }

    #[test]
    fn email_domain_labels_must_be_non_empty() {
        assert!(validate_email("a@b..com").is_err());
        assert!(validate_email("a@.b.com").is_err());
        assert!(validate_email("a@b.com.").is_err());
        assert!(validate_email("a@mail.b.co").is_ok());
    }

    #[test]
    fn message_needs_ten_trimmed_characters() {
        assert!(validate_message("123456789").is_err());
        assert!(validate_message("   123456789   ").is_err());
        assert!(validate_message("1234567890").is_ok());
    }

    #[test]
    fn field_errors_carry_the_field() {
        let err = validate_field(Field::Message, "short").unwrap_err();
        assert_eq!(err.field, Field::Message);
        assert_eq!(err.to_string(), "message: Message must be at least 10 characters");
    }

    #[test]
    fn fields_round_trip_through_their_names() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("subject"), None);
    }

    #[test]
    fn form_needs_every_field() {
        assert_eq!(missing_field(&[Field::Message, Field::Name, Field::Email]), None);
        assert_eq!(missing_field(&[Field::Name, Field::Message]), Some(Field::Email));
        assert_eq!(missing_field(&[]), Some(Field::Name));
    }

    #[test]
    fn set_updates_the_matching_value() {
        let mut form = ContactSubmission::default();
        form.set(Field::Email, "a@b.com".into());
        assert_eq!(form.value(Field::Email), "a@b.com");
        assert_eq!(form.value(Field::Name), "");
    }
}
