//! Per-modal validation controller.
//!
//! Unlike the top-level profile form, modal fields validate on blur or on
//! submit only: the backing inputs are short-lived and re-seeded on every
//! open, so eager per-keystroke validation buys nothing.

use std::collections::{BTreeMap, BTreeSet};

use crate::intake::validation::{self, ValidationRule};

/// Static description of one modal input.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub rule: Option<ValidationRule>,
}

impl FieldConfig {
    pub fn required(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            required: true,
            rule: None,
        }
    }

    pub fn optional(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            required: false,
            rule: None,
        }
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

/// Validation state scoped to a single modal instance.
#[derive(Debug)]
pub struct ModalValidator {
    fields: Vec<FieldConfig>,
    errors: BTreeMap<&'static str, String>,
    touched: BTreeSet<&'static str>,
    show_errors: bool,
}

impl ModalValidator {
    pub fn new(fields: Vec<FieldConfig>) -> Self {
        Self {
            fields,
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            show_errors: false,
        }
    }

    fn check(config: &FieldConfig, value: &str) -> Option<String> {
        if value.is_empty() {
            if config.required {
                return Some(format!("{} is required", config.label));
            }
            return None;
        }

        match &config.rule {
            Some(rule) => validation::validate(value, rule, config.label),
            None => None,
        }
    }

    /// Validate every configured field against `data`, recording all
    /// violations. Sets the show-errors flag and returns overall validity.
    pub fn validate_form(&mut self, data: &BTreeMap<String, String>) -> bool {
        let mut errors = BTreeMap::new();
        for config in &self.fields {
            let value = data.get(config.id).map(String::as_str).unwrap_or("");
            if let Some(error) = Self::check(config, value) {
                errors.insert(config.id, error);
            }
        }

        let valid = errors.is_empty();
        self.errors = errors;
        self.show_errors = true;
        valid
    }

    /// Mark a field touched and revalidate its current value.
    pub fn handle_field_blur(&mut self, id: &str, value: &str) {
        let Some(config) = self.fields.iter().find(|config| config.id == id) else {
            return;
        };
        self.touched.insert(config.id);
        match Self::check(config, value) {
            Some(error) => {
                self.errors.insert(config.id, error);
            }
            None => {
                self.errors.remove(config.id);
            }
        }
    }

    /// Clear errors, touched state, and the show-errors flag. Invoked on every
    /// closed-to-open transition for a fresh entry so a previous session's
    /// errors cannot bleed through. Idempotent.
    pub fn reset_validation(&mut self) {
        self.errors.clear();
        self.touched.clear();
        self.show_errors = false;
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    /// Display policy: an error surfaces once the whole form was submitted or
    /// that specific field was blurred.
    pub fn should_show(&self, id: &str) -> bool {
        self.error(id).is_some() && (self.show_errors || self.touched.contains(id))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn show_errors(&self) -> bool {
        self.show_errors
    }

    pub fn touched(&self, id: &str) -> bool {
        self.touched.contains(id)
    }
}

/// Field configs for the charges modal.
pub fn charges_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::required("applicationFee", "Application fee"),
        FieldConfig::required("applicantType", "Applicant type"),
        FieldConfig::required("adminFee", "Admin fee"),
    ]
}

/// Field configs for the property address modal. Zip code carries the
/// full-string ZIP pattern on top of presence.
pub fn property_address_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::required("propertyName", "Property name"),
        FieldConfig::required("totalUnits", "Total units"),
        FieldConfig::required("country", "Country"),
        FieldConfig::required("streetAddress", "Street address"),
        FieldConfig::required("city", "City"),
        FieldConfig::required("state", "State"),
        FieldConfig::required("zipCode", "Zip code").with_rule(ValidationRule {
            pattern: Some(validation::zip_pattern()),
            ..ValidationRule::default()
        }),
    ]
}

/// Field configs for the leasing info modal.
pub fn leasing_info_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::required("managerName", "Manager name"),
        FieldConfig::required("countryCode", "Country code"),
        FieldConfig::required("phoneNumber", "Phone number").with_rule(ValidationRule {
            custom: Some(validation::validate_phone),
            ..ValidationRule::default()
        }),
        FieldConfig::required("email", "Email").with_rule(ValidationRule {
            custom: Some(validation::validate_email),
            ..ValidationRule::default()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn validate_form_records_every_violation() {
        let mut validator = ModalValidator::new(charges_fields());
        let valid = validator.validate_form(&data(&[("applicationFee", "100")]));
        assert!(!valid);
        assert_eq!(
            validator.error("applicantType"),
            Some("Applicant type is required")
        );
        assert_eq!(validator.error("adminFee"), Some("Admin fee is required"));
        assert_eq!(validator.error("applicationFee"), None);
        assert!(validator.show_errors());
    }

    #[test]
    fn errors_hidden_until_blur_or_submit() {
        let mut validator = ModalValidator::new(property_address_fields());
        assert!(!validator.should_show("zipCode"));

        validator.handle_field_blur("zipCode", "750");
        assert!(validator.should_show("zipCode"));
        assert_eq!(validator.error("zipCode"), Some("Zip code format is invalid"));

        validator.handle_field_blur("zipCode", "75061");
        assert_eq!(validator.error("zipCode"), None);
    }

    #[test]
    fn blur_on_unknown_field_is_ignored() {
        let mut validator = ModalValidator::new(charges_fields());
        validator.handle_field_blur("nope", "value");
        assert!(!validator.has_errors());
    }

    #[test]
    fn reset_validation_is_idempotent() {
        let mut validator = ModalValidator::new(leasing_info_fields());
        validator.validate_form(&data(&[]));
        assert!(validator.has_errors());

        validator.reset_validation();
        validator.reset_validation();
        assert!(!validator.has_errors());
        assert!(!validator.show_errors());
        assert!(!validator.touched("email"));
    }

    #[test]
    fn leasing_info_applies_email_and_phone_validators() {
        let mut validator = ModalValidator::new(leasing_info_fields());
        let valid = validator.validate_form(&data(&[
            ("managerName", "Dana Cole"),
            ("countryCode", "+1"),
            ("phoneNumber", "972 555 0144"),
            ("email", "dana@b"),
        ]));
        assert!(!valid);
        assert_eq!(validator.error("email"), Some("Invalid email format"));
        assert_eq!(validator.error("phoneNumber"), None);
    }
}
