use std::collections::HashMap;

use crate::error::{BrowseError, BrowseResult};

const PASSWORD_LENGTH_MIN: usize = 8;
const PASSWORD_SPECIAL_CHARACTERS: [char; 16] = [
    '`', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '=', '+',
];

/// A field rule: returns an error message, or `None` when the rule passes.
pub type Validator = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Required".to_string());
    }
    if !is_structurally_valid_email(email) {
        return Some("Invalid Email".to_string());
    }
    None
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Required".to_string());
    }
    if password.chars().count() < PASSWORD_LENGTH_MIN {
        return Some(format!(
            "Password must be at least {PASSWORD_LENGTH_MIN} characters"
        ));
    }
    let includes_special_character = password
        .chars()
        .any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(&c));
    if !includes_special_character {
        return Some("Password must include at least one special character".to_string());
    }
    None
}

pub fn validate_password_verify(password_verify: &str, password: &str) -> Option<String> {
    if password_verify.is_empty() {
        return Some("Required".to_string());
    }
    if password_verify != password {
        return Some("Passwords do not match".to_string());
    }
    None
}

fn is_structurally_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs an interior dot separating non-empty labels.
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

/// Named field rules for one form, evaluated together or one at a time.
pub struct FormValidator {
    validators: Vec<(String, Validator)>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Register a rule for a form field. Registering a field again replaces
    /// its rule.
    pub fn add_validator(mut self, field: &str, validator: Validator) -> Self {
        if let Some(existing) = self
            .validators
            .iter_mut()
            .find(|(name, _)| name == field)
        {
            existing.1 = validator;
        } else {
            self.validators.push((field.to_string(), validator));
        }
        self
    }

    /// Evaluate every registered field against `values`. Returns the error
    /// messages keyed by field; an empty map means the form is valid.
    pub fn validate_form(
        &self,
        values: &HashMap<String, String>,
    ) -> BrowseResult<HashMap<String, String>> {
        let mut messages = HashMap::new();
        for (field, validator) in &self.validators {
            let value = values
                .get(field)
                .ok_or_else(|| BrowseError::InvalidInput(format!("form field {field} not found")))?;
            if let Some(message) = validator(value) {
                messages.insert(field.clone(), message);
            }
        }
        Ok(messages)
    }

    /// Evaluate a single registered field.
    pub fn validate_input(&self, field: &str, value: &str) -> BrowseResult<Option<String>> {
        let (_, validator) = self
            .validators
            .iter()
            .find(|(name, _)| name == field)
            .ok_or_else(|| BrowseError::InvalidInput(format!("validator {field} not found")))?;
        Ok(validator(value))
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_required() {
        assert_eq!(validate_email(""), Some("Required".to_string()));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["plain", "no@dot", "@host.com", "two@@host.com", "a b@host.com", "a@.com"] {
            assert_eq!(
                validate_email(email),
                Some("Invalid Email".to_string()),
                "{email} should be invalid"
            );
        }
    }

    #[test]
    fn well_formed_email_passes() {
        assert_eq!(validate_email("user@example.com"), None);
        assert_eq!(validate_email("first.last@sub.example.org"), None);
    }

    #[test]
    fn short_password_is_rejected() {
        assert_eq!(
            validate_password("ab!"),
            Some("Password must be at least 8 characters".to_string())
        );
    }

    #[test]
    fn password_needs_a_special_character() {
        assert_eq!(
            validate_password("abcdefgh"),
            Some("Password must include at least one special character".to_string())
        );
        assert_eq!(validate_password("abcdefg!"), None);
    }

    #[test]
    fn password_verify_must_match() {
        assert_eq!(validate_password_verify("", "secret!!"), Some("Required".to_string()));
        assert_eq!(
            validate_password_verify("secret!?", "secret!!"),
            Some("Passwords do not match".to_string())
        );
        assert_eq!(validate_password_verify("secret!!", "secret!!"), None);
    }

    #[test]
    fn form_validation_collects_messages_per_field() {
        let form = FormValidator::new()
            .add_validator("email", Box::new(|value| validate_email(value)))
            .add_validator("password", Box::new(|value| validate_password(value)));

        let values = HashMap::from([
            ("email".to_string(), "not-an-email".to_string()),
            ("password".to_string(), "longenough!".to_string()),
        ]);

        let messages = form.validate_form(&values).expect("validate");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages["email"], "Invalid Email");
    }

    #[test]
    fn missing_form_field_is_an_error() {
        let form = FormValidator::new()
            .add_validator("email", Box::new(|value| validate_email(value)));

        let result = form.validate_form(&HashMap::new());

        assert!(matches!(result, Err(BrowseError::InvalidInput(_))));
    }

    #[test]
    fn validate_input_checks_one_field() {
        let form = FormValidator::new()
            .add_validator("email", Box::new(|value| validate_email(value)));

        assert_eq!(form.validate_input("email", "user@example.com").expect("ok"), None);
        assert!(form.validate_input("name", "x").is_err());
    }
}
