//! Fluent validation over string fields.

use url::Url;

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Error message for a field, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field_name == field)
            .map(|e| e.message.as_str())
    }
}

type Rule = Box<dyn Fn(&str) -> bool + Send + Sync>;

struct FieldEntry {
    name: String,
    value: String,
    optional: bool,
    rules: Vec<(Rule, String)>,
}

impl FieldEntry {
    /// Message of the first failing rule.
    fn first_error(&self) -> Option<&str> {
        if self.optional && self.value.trim().is_empty() {
            return None;
        }
        self.rules
            .iter()
            .find(|(rule, _)| !rule(&self.value))
            .map(|(_, msg)| msg.as_str())
    }
}

/// Builder for validating multiple fields.
///
/// ```
/// use frontdesk_lib::settings::Validator;
///
/// let result = Validator::new()
///     .field("name", "")
///         .required("Name is required")
///     .field("email", "guest@example.com")
///         .email("Invalid email")
///     .validate();
///
/// assert_eq!(result.error_for("name"), Some("Name is required"));
/// assert_eq!(result.error_for("email"), None);
/// ```
#[derive(Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to validate.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            entry: FieldEntry {
                name: name.into(),
                value: value.into(),
                optional: false,
                rules: Vec::new(),
            },
        }
    }

    /// Run every rule, keeping the first error of each field.
    pub fn validate(self) -> ValidationResult {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|field| {
                field.first_error().map(|message| FieldError {
                    field_name: field.name.clone(),
                    message: message.to_string(),
                })
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            log::debug!("validation failed for {} field(s)", errors.len());
            ValidationResult::Invalid(errors)
        }
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Add a custom rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.entry.rules.push((Box::new(f), msg.into()));
        self
    }

    /// An empty value passes every rule.
    pub fn optional(mut self) -> Self {
        self.entry.optional = true;
        self
    }

    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Minimum length in characters.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Maximum length in characters.
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(email_address::EmailAddress::is_valid, msg)
    }

    /// Require an absolute http(s) URL.
    pub fn url(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| Url::parse(v).is_ok_and(|u| matches!(u.scheme(), "http" | "https")),
            msg,
        )
    }

    /// Finish this field and start another.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        self.finalize().field(name, value)
    }

    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(self.entry);
        validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_only() {
        let result = Validator::new()
            .field("contact", "")
            .required("required")
            .min_length(6, "too short")
            .validate();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.error_for("contact"), Some("required"));
    }

    #[test]
    fn test_optional_skips_empty() {
        let result = Validator::new()
            .field("facebook", "")
            .optional()
            .url("bad url")
            .validate();
        assert!(result.is_valid());
    }

    #[test]
    fn test_url_rule() {
        let check = |v: &str| {
            Validator::new()
                .field("link", v)
                .url("bad url")
                .validate()
                .is_valid()
        };
        assert!(check("https://facebook.com/hotel"));
        assert!(!check("facebook.com/hotel"));
        assert!(!check("ftp://example.com"));
    }

    #[test]
    fn test_length_counts_chars() {
        let result = Validator::new()
            .field("contact", "ñññññ")
            .min_length(6, "too short")
            .validate();
        assert!(result.is_invalid());
    }
}
