//! Step navigator tying the intake forms together. Forward movement is
//! gated on the current step validating; backward movement never is.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::checkout::CheckoutState;
use super::condominium::CondominiumDetailForm;
use super::profile::ProfileForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntakeStep {
    #[default]
    InitialForm,
    CondominiumsInfo,
    Pricing,
}

impl IntakeStep {
    pub const fn ordered() -> [Self; 3] {
        [Self::InitialForm, Self::CondominiumsInfo, Self::Pricing]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::InitialForm => "form",
            Self::CondominiumsInfo => "condominiums-info",
            Self::Pricing => "pricing",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::InitialForm => "Tell us about yourself",
            Self::CondominiumsInfo => "Condominiums information",
            Self::Pricing => "Choose your plan",
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::InitialForm => Some(Self::CondominiumsInfo),
            Self::CondominiumsInfo => Some(Self::Pricing),
            Self::Pricing => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::InitialForm => None,
            Self::CondominiumsInfo => Some(Self::InitialForm),
            Self::Pricing => Some(Self::CondominiumsInfo),
        }
    }
}

impl std::fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// The whole intake flow: one state bundle per step plus the cursor.
#[derive(Debug, Default)]
pub struct IntakeWizard {
    step: IntakeStep,
    profile: ProfileForm,
    condominium: CondominiumDetailForm,
    checkout: CheckoutState,
}

impl IntakeWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn profile(&self) -> &ProfileForm {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileForm {
        &mut self.profile
    }

    pub fn condominium(&self) -> &CondominiumDetailForm {
        &self.condominium
    }

    pub fn condominium_mut(&mut self) -> &mut CondominiumDetailForm {
        &mut self.condominium
    }

    pub fn checkout(&self) -> &CheckoutState {
        &self.checkout
    }

    pub fn checkout_mut(&mut self) -> &mut CheckoutState {
        &mut self.checkout
    }

    /// Attempt to move forward. Returns whether the step changed; a refusal
    /// leaves the current step's errors turned on so the caller can render
    /// them.
    pub fn advance(&mut self) -> bool {
        let passed = match self.step {
            IntakeStep::InitialForm => self.profile.validate_form(),
            IntakeStep::CondominiumsInfo => {
                self.condominium.show_all_errors();
                self.condominium.is_complete()
            }
            IntakeStep::Pricing => false,
        };
        if !passed {
            debug!(step = %self.step, "step blocked by validation");
            return false;
        }
        match self.step.next() {
            Some(next) => {
                info!(from = %self.step, to = %next, "intake step advanced");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move backward without validating; entered data is kept.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                info!(from = %self.step, to = %previous, "intake step rewound");
                self.step = previous;
                true
            }
            None => false,
        }
    }
}
