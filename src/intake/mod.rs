//! Property-listing intake flow: field validation, the landlord profile
//! form, condominium detail collection, pricing, and the step navigator
//! that strings them together.

pub mod checkout;
pub mod condominium;
pub mod modal;
pub mod profile;
pub mod validation;
pub mod wizard;

pub use checkout::{BillingCycle, CardDraft, CheckoutError, CheckoutState, PaymentCard, PlanTier};
pub use condominium::{CondominiumDetailForm, CondominiumError, CondominiumField, ModalSession};
pub use modal::{FieldConfig, ModalValidator};
pub use profile::{ProfileField, ProfileForm, ProfileIssue, PropertyType, UserRole};
pub use validation::{validate, ValidationRule, Validator};
pub use wizard::{IntakeStep, IntakeWizard};
