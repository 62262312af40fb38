//! Field-level validation rules and the built-in domain validators.
//!
//! Every function here is total: a failed check is reported as an error
//! string, never as a panic or an `Err` the caller must branch on.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone pattern compiles"));
static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zip pattern compiles"));

const MIN_LICENSE_LEN: usize = 6;
const MIN_COMPANY_ID_LEN: usize = 9;

/// Signature shared by the `custom` hook of [`ValidationRule`] and the
/// built-in validators below.
pub type Validator = fn(&str) -> Option<String>;

/// Declarative constraints attached to a field beyond bare presence.
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static Regex>,
    pub custom: Option<Validator>,
}

impl std::fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

/// Check `value` against `rule`, producing a human-readable error or nothing.
///
/// Check order is fixed: required, then length bounds, then pattern, then the
/// custom hook last. An optional field left empty short-circuits to no error.
pub fn validate(value: &str, rule: &ValidationRule, label: &str) -> Option<String> {
    if value.is_empty() {
        if rule.required {
            return Some(format!("{label} is required"));
        }
        return None;
    }

    let len = value.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            return Some(format!("{label} must be at least {min} characters"));
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            return Some(format!("{label} must be no more than {max} characters"));
        }
    }
    if let Some(pattern) = rule.pattern {
        if !pattern.is_match(value) {
            return Some(format!("{label} format is invalid"));
        }
    }
    if let Some(custom) = rule.custom {
        if let Some(error) = custom(value) {
            return Some(error);
        }
    }

    None
}

pub fn validate_email(value: &str) -> Option<String> {
    if EMAIL_REGEX.is_match(value) {
        None
    } else {
        Some("Invalid email format".to_string())
    }
}

pub fn validate_phone(value: &str) -> Option<String> {
    if PHONE_REGEX.is_match(value) {
        None
    } else {
        Some("Invalid phone number".to_string())
    }
}

pub fn validate_zip(value: &str) -> Option<String> {
    if ZIP_REGEX.is_match(value) {
        None
    } else {
        Some("Invalid zip code format".to_string())
    }
}

pub fn validate_license(value: &str) -> Option<String> {
    if value.chars().count() >= MIN_LICENSE_LEN {
        None
    } else {
        Some(format!(
            "License must be at least {MIN_LICENSE_LEN} characters"
        ))
    }
}

pub fn validate_company_id(value: &str) -> Option<String> {
    if value.chars().count() >= MIN_COMPANY_ID_LEN {
        None
    } else {
        Some(format!(
            "EIN/TIN must be at least {MIN_COMPANY_ID_LEN} characters"
        ))
    }
}

/// Full-string ZIP pattern, exposed so modal field configs can reuse it.
pub fn zip_pattern() -> &'static Regex {
    &ZIP_REGEX
}

/// Full-string email pattern, exposed so modal field configs can reuse it.
pub fn email_pattern() -> &'static Regex {
    &EMAIL_REGEX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_field_left_empty_passes() {
        let rule = ValidationRule {
            min_length: Some(3),
            ..ValidationRule::default()
        };
        assert_eq!(validate("", &rule, "Website"), None);
    }

    #[test]
    fn required_field_left_empty_fails_first() {
        let rule = ValidationRule {
            required: true,
            min_length: Some(3),
            ..ValidationRule::default()
        };
        assert_eq!(
            validate("", &rule, "City").as_deref(),
            Some("City is required")
        );
    }

    #[test]
    fn length_bounds_checked_before_pattern() {
        let rule = ValidationRule {
            required: true,
            min_length: Some(6),
            pattern: Some(zip_pattern()),
            ..ValidationRule::default()
        };
        // "750" violates both; the length message must win.
        assert_eq!(
            validate("750", &rule, "Zip code").as_deref(),
            Some("Zip code must be at least 6 characters")
        );
    }

    #[test]
    fn pattern_failure_reports_format_message() {
        let rule = ValidationRule {
            required: true,
            pattern: Some(zip_pattern()),
            ..ValidationRule::default()
        };
        assert_eq!(
            validate("7506A", &rule, "Zip code").as_deref(),
            Some("Zip code format is invalid")
        );
    }

    #[test]
    fn custom_hook_runs_last() {
        fn no_spaces(value: &str) -> Option<String> {
            value
                .contains(' ')
                .then(|| "No spaces allowed".to_string())
        }
        let rule = ValidationRule {
            required: true,
            min_length: Some(3),
            custom: Some(no_spaces),
            ..ValidationRule::default()
        };
        assert_eq!(
            validate("a b", &rule, "Code").as_deref(),
            Some("No spaces allowed")
        );
        // Length check still wins over the custom hook.
        assert_eq!(
            validate(" b", &rule, "Code").as_deref(),
            Some("Code must be at least 3 characters")
        );
    }

    #[test]
    fn email_requires_tld_segment() {
        assert_eq!(validate_email("a@b.com"), None);
        assert_eq!(
            validate_email("a@b").as_deref(),
            Some("Invalid email format")
        );
        assert!(validate_email("a b@c.com").is_some());
    }

    #[test]
    fn zip_accepts_five_and_nine_digit_forms() {
        assert_eq!(validate_zip("75061"), None);
        assert_eq!(validate_zip("75061-1234"), None);
        assert!(validate_zip("7506").is_some());
        assert!(validate_zip("75061-12").is_some());
    }

    #[test]
    fn phone_allows_grouping_characters() {
        assert_eq!(validate_phone("+1 (972) 555-0144"), None);
        assert_eq!(validate_phone("9725550144"), None);
        assert!(validate_phone("555-0144").is_some());
        assert!(validate_phone("call me maybe").is_some());
    }

    #[test]
    fn license_and_company_id_enforce_minimum_lengths() {
        assert_eq!(validate_license("TX1234"), None);
        assert_eq!(
            validate_license("TX123").as_deref(),
            Some("License must be at least 6 characters")
        );
        assert_eq!(validate_company_id("12-345678"), None);
        assert_eq!(
            validate_company_id("12345678").as_deref(),
            Some("EIN/TIN must be at least 9 characters")
        );
    }
}
