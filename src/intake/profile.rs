//! Initial step: property type and role selection plus the role-conditional
//! contact fields. Unlike the modal controller, this form validates strings
//! eagerly on every update.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intake::validation::{
    validate_company_id, validate_email, validate_license, validate_phone, validate_zip,
    Validator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Single,
    Apartments,
    Condominiums,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Single, Self::Apartments, Self::Condominiums]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single House Property",
            Self::Apartments => "Apartments complex",
            Self::Condominiums => "Condominiums",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Single => "Single unit house for single family",
            Self::Apartments | Self::Condominiums => "Multiple unit house for families",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Landlord,
    Realtor,
    PropertyManagement,
}

impl UserRole {
    pub const fn ordered() -> [Self; 3] {
        [Self::Landlord, Self::Realtor, Self::PropertyManagement]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Landlord => "Landlord",
            Self::Realtor => "Realtor",
            Self::PropertyManagement => "Property management company",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Landlord => "Owner of the property",
            Self::Realtor => "Manage property on behalf on owner",
            Self::PropertyManagement => "For management company",
        }
    }
}

/// Role-conditional inputs collected on the initial step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    RealtorLicenseNumber,
    CompanyName,
    CompanyId,
    JobTitle,
    Country,
    StreetAddress,
    Phone,
    Email,
    City,
    State,
    ZipCode,
}

impl ProfileField {
    pub const fn id(self) -> &'static str {
        match self {
            Self::RealtorLicenseNumber => "realtorLicenseNumber",
            Self::CompanyName => "companyName",
            Self::CompanyId => "companyId",
            Self::JobTitle => "jobTitle",
            Self::Country => "country",
            Self::StreetAddress => "streetAddress",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RealtorLicenseNumber => "License number",
            Self::CompanyName => "Company name",
            Self::CompanyId => "EIN/TIN",
            Self::JobTitle => "Job title",
            Self::Country => "Country",
            Self::StreetAddress => "Street address",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "Zip code",
        }
    }

    /// Built-in content validator for the field, if any.
    pub fn validator(self) -> Option<Validator> {
        match self {
            Self::RealtorLicenseNumber => Some(validate_license),
            Self::CompanyId => Some(validate_company_id),
            Self::Email => Some(validate_email),
            Self::Phone => Some(validate_phone),
            Self::ZipCode => Some(validate_zip),
            _ => None,
        }
    }

    /// Every field the property-management role must fill.
    pub const fn management_required() -> [Self; 10] {
        [
            Self::CompanyName,
            Self::CompanyId,
            Self::JobTitle,
            Self::Country,
            Self::StreetAddress,
            Self::Phone,
            Self::Email,
            Self::City,
            Self::State,
            Self::ZipCode,
        ]
    }
}

/// A stored field value: free text or a checkbox flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Text(String),
    Flag(bool),
}

impl FieldInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Flag(_) => None,
        }
    }

    fn is_present(&self) -> bool {
        match self {
            Self::Text(value) => !value.is_empty(),
            Self::Flag(flag) => *flag,
        }
    }
}

/// Key space of the initial step's error map: the three selections plus the
/// role-conditional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileIssue {
    PropertyType,
    UserRole,
    AcceptTerms,
    Field(ProfileField),
}

const PROPERTY_TYPE_MISSING: &str = "Please select a property type";
const USER_ROLE_MISSING: &str = "Please select your role";
const TERMS_MISSING: &str = "You must accept the terms and conditions";
const LICENSE_MISSING: &str = "License number is required";

/// Mutable state of the initial form step.
#[derive(Debug, Default)]
pub struct ProfileForm {
    values: BTreeMap<ProfileField, FieldInput>,
    property_type: Option<PropertyType>,
    user_role: Option<UserRole>,
    accept_terms: bool,
    errors: BTreeMap<ProfileIssue, String>,
    touched: BTreeSet<ProfileField>,
    show_errors: bool,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        self.property_type
    }

    pub fn user_role(&self) -> Option<UserRole> {
        self.user_role
    }

    pub fn accept_terms(&self) -> bool {
        self.accept_terms
    }

    pub fn set_property_type(&mut self, property_type: PropertyType) {
        self.property_type = Some(property_type);
        self.errors.remove(&ProfileIssue::PropertyType);
    }

    pub fn set_user_role(&mut self, role: UserRole) {
        self.user_role = Some(role);
        self.errors.remove(&ProfileIssue::UserRole);
    }

    pub fn set_accept_terms(&mut self, accepted: bool) {
        self.accept_terms = accepted;
        if accepted {
            self.errors.remove(&ProfileIssue::AcceptTerms);
        }
    }

    pub fn value(&self, field: ProfileField) -> Option<&FieldInput> {
        self.values.get(&field)
    }

    pub fn text(&self, field: ProfileField) -> Option<&str> {
        self.values.get(&field).and_then(FieldInput::as_text)
    }

    /// Store a value; text values are validated immediately so the error map
    /// tracks every keystroke.
    pub fn update_field(&mut self, field: ProfileField, value: FieldInput) {
        if let FieldInput::Text(text) = &value {
            match Self::content_error(field, text) {
                Some(error) => {
                    self.errors.insert(ProfileIssue::Field(field), error);
                }
                None => {
                    self.errors.remove(&ProfileIssue::Field(field));
                }
            }
        }
        self.values.insert(field, value);
    }

    /// Mark a field touched and revalidate whatever is stored. A field never
    /// written to stays error-free.
    pub fn handle_field_blur(&mut self, field: ProfileField) {
        self.touched.insert(field);
        let Some(text) = self.text(field).map(str::to_owned) else {
            return;
        };
        match Self::content_error(field, &text) {
            Some(error) => {
                self.errors.insert(ProfileIssue::Field(field), error);
            }
            None => {
                self.errors.remove(&ProfileIssue::Field(field));
            }
        }
    }

    // Runs on whatever is stored, empty included; this form validates
    // live on every keystroke.
    fn content_error(field: ProfileField, value: &str) -> Option<String> {
        field.validator().and_then(|validator| validator(value))
    }

    /// Authoritative full-form check used to gate navigation. Rebuilds the
    /// error map from scratch, flips on global error display, and reports
    /// every violation at once.
    pub fn validate_form(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.property_type.is_none() {
            errors.insert(
                ProfileIssue::PropertyType,
                PROPERTY_TYPE_MISSING.to_string(),
            );
        }
        if self.user_role.is_none() {
            errors.insert(ProfileIssue::UserRole, USER_ROLE_MISSING.to_string());
        }
        if !self.accept_terms {
            errors.insert(ProfileIssue::AcceptTerms, TERMS_MISSING.to_string());
        }

        match self.user_role {
            Some(UserRole::Realtor) => {
                let field = ProfileField::RealtorLicenseNumber;
                match self.text(field).filter(|value| !value.is_empty()) {
                    None => {
                        errors.insert(ProfileIssue::Field(field), LICENSE_MISSING.to_string());
                    }
                    Some(value) => {
                        if let Some(error) = validate_license(value) {
                            errors.insert(ProfileIssue::Field(field), error);
                        }
                    }
                }
            }
            Some(UserRole::PropertyManagement) => {
                for field in ProfileField::management_required() {
                    match self.text(field).filter(|value| !value.is_empty()) {
                        None => {
                            errors.insert(
                                ProfileIssue::Field(field),
                                format!("{} is required", field.label()),
                            );
                        }
                        Some(value) => {
                            if let Some(error) = Self::content_error(field, value) {
                                errors.insert(ProfileIssue::Field(field), error);
                            }
                        }
                    }
                }
            }
            _ => {}
        }

        let valid = errors.is_empty();
        debug!(valid, issues = errors.len(), "profile form validated");
        self.errors = errors;
        self.show_errors = true;
        valid
    }

    /// Lighter-weight enablement signal. Trusts the stored error map instead
    /// of re-deriving errors for fields the user has not edited, so it can
    /// differ from `validate_form` until a submit attempt.
    pub fn is_valid(&self) -> bool {
        if self.property_type.is_none() || self.user_role.is_none() || !self.accept_terms {
            return false;
        }
        if !self.errors.is_empty() {
            return false;
        }

        match self.user_role {
            Some(UserRole::Realtor) => self
                .value(ProfileField::RealtorLicenseNumber)
                .is_some_and(FieldInput::is_present),
            Some(UserRole::PropertyManagement) => ProfileField::management_required()
                .into_iter()
                .all(|field| self.value(field).is_some_and(FieldInput::is_present)),
            _ => true,
        }
    }

    pub fn error(&self, issue: ProfileIssue) -> Option<&str> {
        self.errors.get(&issue).map(String::as_str)
    }

    /// Display policy: a field error surfaces once submit was attempted or
    /// that field was blurred. Selection errors only appear after submit.
    pub fn visible_error(&self, issue: ProfileIssue) -> Option<&str> {
        let shown = match issue {
            ProfileIssue::Field(field) => self.show_errors || self.touched.contains(&field),
            _ => self.show_errors,
        };
        if shown {
            self.error(issue)
        } else {
            None
        }
    }

    pub fn show_errors(&self) -> bool {
        self.show_errors
    }
}

/// Value/label pair backing a select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const COUNTRY_OPTIONS: [SelectOption; 2] = [
    SelectOption {
        value: "us",
        label: "United States",
    },
    SelectOption {
        value: "ca",
        label: "Canada",
    },
];

pub const STATE_OPTIONS: [SelectOption; 2] = [
    SelectOption {
        value: "tx",
        label: "Texas",
    },
    SelectOption {
        value: "ca",
        label: "California",
    },
];
