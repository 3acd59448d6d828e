//! Text-field validation rules.
//!
//! Rules run in a fixed order and the first failure wins: required, minimum length,
//! maximum length, pattern, custom validator. Built-in patterns are data in
//! [`pattern_table`], keyed by [`ValidationKind`].

use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Built-in input formats.
pub enum ValidationKind {
    /// `local@domain.tld` address.
    Email,
    /// `http`/`https` URL.
    Url,
    /// Phone number with optional country code and separators.
    Phone,
    /// Card number in digit groups, optionally separated by spaces or dashes.
    CreditCard,
    /// US ZIP or ZIP+4.
    PostalCode,
    /// Digits only.
    Numeric,
    /// ASCII letters and digits only.
    Alphanumeric,
}

impl ValidationKind {
    /// Every built-in kind.
    pub const ALL: [Self; 7] = [
        Self::Email,
        Self::Url,
        Self::Phone,
        Self::CreditCard,
        Self::PostalCode,
        Self::Numeric,
        Self::Alphanumeric,
    ];

    /// HTML `type` attribute best matching this kind.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Phone => "tel",
            Self::CreditCard | Self::PostalCode | Self::Numeric | Self::Alphanumeric => "text",
        }
    }

    /// HTML `inputmode` hint for virtual keyboards.
    pub fn input_mode(self) -> Option<&'static str> {
        match self {
            Self::Email => Some("email"),
            Self::Url => Some("url"),
            Self::Phone => Some("tel"),
            Self::CreditCard | Self::PostalCode | Self::Numeric => Some("numeric"),
            Self::Alphanumeric => None,
        }
    }
}

const UNCHECKED_PATTERN: &str = "This value cannot be checked";

/// Compiled pattern and its failure message.
#[derive(Debug)]
pub struct PatternEntry {
    /// Anchored pattern.
    pub regex: Regex,
    /// Message shown when the value does not match.
    pub message: &'static str,
}

/// Built-in `(pattern, message)` table.
pub fn pattern_table() -> &'static [(ValidationKind, PatternEntry)] {
    static TABLE: OnceLock<Vec<(ValidationKind, PatternEntry)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            (
                ValidationKind::Email,
                r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$",
                "Enter a valid email address",
            ),
            (
                ValidationKind::Url,
                r"^https?://[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(:\d+)?(/\S*)?$",
                "Enter a valid URL",
            ),
            (
                ValidationKind::Phone,
                r"^\+?(?:[0-9]{1,3})?[-. ]?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}$",
                "Enter a valid phone number",
            ),
            (
                ValidationKind::CreditCard,
                r"^[0-9]{4}([- ]?[0-9]{3,4}){2,3}([- ]?[0-9]{1,3})?$",
                "Enter a valid card number",
            ),
            (
                ValidationKind::PostalCode,
                r"^[0-9]{5}(-[0-9]{4})?$",
                "Enter a valid postal code",
            ),
            (ValidationKind::Numeric, r"^[0-9]+$", "Only digits are allowed"),
            (
                ValidationKind::Alphanumeric,
                r"^[A-Za-z0-9]+$",
                "Only letters and digits are allowed",
            ),
        ]
        .into_iter()
        .filter_map(|(kind, pattern, message)| {
            Regex::new(pattern)
                .ok()
                .map(|regex| (kind, PatternEntry { regex, message }))
        })
        .collect()
    })
}

/// Table entry for `kind`.
pub fn pattern_for(kind: ValidationKind) -> Option<&'static PatternEntry> {
    pattern_table()
        .iter()
        .find(|(entry_kind, _)| *entry_kind == kind)
        .map(|(_, entry)| entry)
}

/// First failing rule for a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty value on a required field.
    #[error("This field is required")]
    Required,
    /// Fewer characters than `min`.
    #[error("Must be at least {min} characters")]
    TooShort {
        /// Minimum length.
        min: usize,
    },
    /// More characters than `max`.
    #[error("Must be at most {max} characters")]
    TooLong {
        /// Maximum length.
        max: usize,
    },
    /// Value does not match the configured pattern.
    #[error("{0}")]
    Pattern(String),
    /// Custom validator rejected the value.
    #[error("{0}")]
    Custom(String),
}

/// Pattern rule: a built-in kind or a caller regex with its own message.
#[derive(Debug, Clone)]
pub enum PatternRule {
    /// Built-in table entry.
    Kind(ValidationKind),
    /// Caller-supplied pattern.
    Custom {
        /// Pattern the whole value must match.
        regex: Regex,
        /// Failure message.
        message: String,
    },
}

impl PatternRule {
    /// Compiles a caller pattern.
    pub fn custom(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self::Custom {
            regex: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Kind(kind) => {
                let entry = pattern_for(*kind);
                debug_assert!(entry.is_some(), "no compiled pattern for {kind:?}");
                check_entry(entry, value)
            }
            Self::Custom { regex, message } if !regex.is_match(value) => {
                Err(ValidationError::Pattern(message.clone()))
            }
            Self::Custom { .. } => Ok(()),
        }
    }
}

/// Matches `value` against a table entry. A missing entry rejects the value.
fn check_entry(entry: Option<&PatternEntry>, value: &str) -> Result<(), ValidationError> {
    match entry {
        Some(entry) if entry.regex.is_match(value) => Ok(()),
        Some(entry) => Err(ValidationError::Pattern(entry.message.to_string())),
        None => Err(ValidationError::Pattern(UNCHECKED_PATTERN.to_string())),
    }
}

/// Caller validator returning a message on failure.
#[derive(Clone)]
pub struct CustomValidator(Arc<dyn Fn(&str) -> Option<String> + Send + Sync>);

impl CustomValidator {
    /// Wraps a closure.
    pub fn new(check: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(check))
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}

/// Rule set for one field.
#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
    /// Value must be non-empty after trimming.
    pub required: bool,
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Format rule.
    pub pattern: Option<PatternRule>,
    /// Final caller check.
    pub custom: Option<CustomValidator>,
}

impl ValidationRules {
    /// Empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Uses a built-in format.
    pub fn kind(mut self, kind: ValidationKind) -> Self {
        self.pattern = Some(PatternRule::Kind(kind));
        self
    }

    /// Uses a caller pattern.
    pub fn pattern(mut self, rule: PatternRule) -> Self {
        self.pattern = Some(rule);
        self
    }

    /// Adds a caller validator.
    pub fn custom(
        mut self,
        check: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.custom = Some(CustomValidator::new(check));
        self
    }

    /// Built-in kind, when the pattern rule is one.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self.pattern {
            Some(PatternRule::Kind(kind)) => Some(kind),
            _ => None,
        }
    }

    /// Checks `value`, returning the first failing rule.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return if self.required {
                Err(ValidationError::Required)
            } else {
                Ok(())
            };
        }

        let length = value.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(ValidationError::TooShort { min });
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationError::TooLong { max });
            }
        }
        if let Some(pattern) = &self.pattern {
            pattern.check(value)?;
        }
        if let Some(CustomValidator(check)) = &self.custom {
            if let Some(message) = check(value) {
                return Err(ValidationError::Custom(message));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_kind_has_a_compiled_pattern() {
        for kind in ValidationKind::ALL {
            assert!(pattern_for(kind).is_some(), "{kind:?}");
        }
    }

    #[test]
    fn missing_table_entry_rejects_the_value() {
        assert_eq!(
            check_entry(None, "12345"),
            Err(ValidationError::Pattern(UNCHECKED_PATTERN.to_string()))
        );
        let numeric = pattern_for(ValidationKind::Numeric);
        assert_eq!(check_entry(numeric, "12345"), Ok(()));
        assert_eq!(
            check_entry(numeric, "12a45"),
            Err(ValidationError::Pattern("Only digits are allowed".to_string()))
        );
    }

    #[test]
    fn required_fails_first_on_blank_input() {
        let rules = ValidationRules::new()
            .required()
            .min_length(3)
            .kind(ValidationKind::Email);
        assert_eq!(rules.validate("   "), Err(ValidationError::Required));
        assert_eq!(
            ValidationError::Required.to_string(),
            "This field is required"
        );
    }

    #[test]
    fn optional_blank_input_skips_remaining_rules() {
        let rules = ValidationRules::new().min_length(3).kind(ValidationKind::Email);
        assert_eq!(rules.validate(""), Ok(()));
    }

    #[test]
    fn length_rules_run_before_pattern() {
        let rules = ValidationRules::new()
            .min_length(6)
            .max_length(10)
            .kind(ValidationKind::Numeric);
        assert_eq!(rules.validate("ab"), Err(ValidationError::TooShort { min: 6 }));
        assert_eq!(
            rules.validate("abcdefghijkl"),
            Err(ValidationError::TooLong { max: 10 })
        );
        assert_eq!(
            rules.validate("abcdefg"),
            Err(ValidationError::Pattern("Only digits are allowed".to_string()))
        );
        assert_eq!(rules.validate("1234567"), Ok(()));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let rules = ValidationRules::new().max_length(3);
        assert_eq!(rules.validate("äöü"), Ok(()));
        assert_eq!(
            ValidationError::TooLong { max: 3 }.to_string(),
            "Must be at most 3 characters"
        );
    }

    #[test]
    fn built_in_patterns_accept_and_reject() {
        let cases = [
            (ValidationKind::Email, "ada@example.com", "ada@example"),
            (ValidationKind::Url, "https://example.com/a?b=c", "example.com"),
            (ValidationKind::Phone, "+1 (555) 123-4567", "12-34"),
            (ValidationKind::CreditCard, "4242 4242 4242 4242", "4242"),
            (ValidationKind::PostalCode, "94103-1234", "9410"),
            (ValidationKind::Alphanumeric, "abc123", "abc 123"),
        ];
        for (kind, good, bad) in cases {
            let rules = ValidationRules::new().kind(kind);
            assert_eq!(rules.validate(good), Ok(()), "{kind:?} {good}");
            assert!(rules.validate(bad).is_err(), "{kind:?} {bad}");
        }
    }

    #[test]
    fn custom_pattern_uses_its_own_message() {
        let rule = PatternRule::custom(r"^[A-Z]{3}$", "Use a three-letter code").expect("regex");
        let rules = ValidationRules::new().pattern(rule);
        assert_eq!(
            rules.validate("abc"),
            Err(ValidationError::Pattern("Use a three-letter code".to_string()))
        );
        assert!(PatternRule::custom("(", "broken").is_err());
    }

    #[test]
    fn custom_validator_runs_last() {
        let rules = ValidationRules::new()
            .kind(ValidationKind::Alphanumeric)
            .custom(|value| (value == "admin").then(|| "Name is reserved".to_string()));
        assert_eq!(
            rules.validate("ad min"),
            Err(ValidationError::Pattern(
                "Only letters and digits are allowed".to_string()
            ))
        );
        assert_eq!(
            rules.validate("admin"),
            Err(ValidationError::Custom("Name is reserved".to_string()))
        );
        assert_eq!(rules.validate("ada"), Ok(()));
    }
}
