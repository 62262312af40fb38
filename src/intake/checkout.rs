//! Pricing step: plan selection and mock payment-card management. Purely
//! local state; "pay" never reaches a processor.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Annually,
}

impl BillingCycle {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annually => "Annually",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Regular,
    Platinum,
    Enterprise,
}

impl PlanTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Regular, Self::Platinum, Self::Enterprise]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Platinum => "Platinum",
            Self::Enterprise => "Enterprise",
        }
    }

    pub const fn description(self) -> &'static str {
        "Price for 1-50 unit"
    }

    /// Monthly price in cents for the chosen billing cycle.
    pub const fn price_cents(self, cycle: BillingCycle) -> u32 {
        match (self, cycle) {
            (Self::Regular, BillingCycle::Monthly) => 9_999,
            (Self::Regular, BillingCycle::Annually) => 8_399,
            (Self::Platinum, BillingCycle::Monthly) => 12_999,
            (Self::Platinum, BillingCycle::Annually) => 10_999,
            (Self::Enterprise, BillingCycle::Monthly) => 19_999,
            (Self::Enterprise, BillingCycle::Annually) => 16_999,
        }
    }

    pub fn price_label(self, cycle: BillingCycle) -> String {
        format_cents(self.price_cents(cycle))
    }
}

/// A saved payment method. Only the masked tail of the number is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCard {
    pub id: String,
    pub name: String,
    pub card_type: String,
    pub masked_number: String,
}

impl PaymentCard {
    pub fn display_line(&self) -> String {
        format!("{}({}) {}", self.name, self.card_type, self.masked_number)
    }
}

/// Raw inputs from the add-card modal, as typed (after cosmetic formatting).
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    pub name: String,
    pub number: String,
    pub expire_date: String,
    pub cvc: String,
}

impl CardDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.number.is_empty()
            && !self.expire_date.is_empty()
            && !self.cvc.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("all card fields must be filled before saving")]
    IncompleteCard,
    #[error("card number must contain at least four digits")]
    ShortCardNumber,
    #[error("no card with id '{0}'")]
    UnknownCard(String),
}

/// Local state of the pricing step.
#[derive(Debug)]
pub struct CheckoutState {
    billing_cycle: BillingCycle,
    selected_plan: Option<PlanTier>,
    selected_card: Option<String>,
    auto_pay: bool,
    cards: Vec<PaymentCard>,
    next_card_id: u64,
}

impl Default for CheckoutState {
    fn default() -> Self {
        let fixture = |id: &str| PaymentCard {
            id: id.to_string(),
            name: "Alex jones".to_string(),
            card_type: "Amex card".to_string(),
            masked_number: "******5565".to_string(),
        };
        Self {
            billing_cycle: BillingCycle::Monthly,
            selected_plan: None,
            selected_card: None,
            auto_pay: false,
            cards: vec![fixture("1"), fixture("2"), fixture("3")],
            next_card_id: 4,
        }
    }
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn billing_cycle(&self) -> BillingCycle {
        self.billing_cycle
    }

    pub fn set_billing_cycle(&mut self, cycle: BillingCycle) {
        self.billing_cycle = cycle;
    }

    pub fn selected_plan(&self) -> Option<PlanTier> {
        self.selected_plan
    }

    pub fn select_plan(&mut self, plan: PlanTier) {
        self.selected_plan = Some(plan);
    }

    pub fn selected_card(&self) -> Option<&str> {
        self.selected_card.as_deref()
    }

    pub fn select_card(&mut self, id: &str) -> Result<(), CheckoutError> {
        if !self.cards.iter().any(|card| card.id == id) {
            return Err(CheckoutError::UnknownCard(id.to_string()));
        }
        self.selected_card = Some(id.to_string());
        Ok(())
    }

    pub fn auto_pay(&self) -> bool {
        self.auto_pay
    }

    pub fn set_auto_pay(&mut self, enabled: bool) {
        self.auto_pay = enabled;
    }

    pub fn cards(&self) -> &[PaymentCard] {
        &self.cards
    }

    /// Synthesize a local card record from the draft: sequential id, generic
    /// type, and a masked number keeping only the last four digits.
    pub fn add_card(&mut self, draft: CardDraft) -> Result<PaymentCard, CheckoutError> {
        if !draft.is_complete() {
            return Err(CheckoutError::IncompleteCard);
        }
        let digits: String = draft.number.chars().filter(char::is_ascii_digit).collect();
        if digits.len() < 4 {
            return Err(CheckoutError::ShortCardNumber);
        }
        let last_four = &digits[digits.len() - 4..];

        let card = PaymentCard {
            id: self.next_card_id.to_string(),
            name: draft.name,
            card_type: "Credit card".to_string(),
            masked_number: format!("******{last_four}"),
        };
        self.next_card_id += 1;
        debug!(card_id = %card.id, "payment card added");
        self.cards.push(card.clone());
        Ok(card)
    }

    /// Payment is enabled only once both a plan and a card are selected.
    pub fn can_pay(&self) -> bool {
        self.selected_plan.is_some() && self.selected_card.is_some()
    }

    pub fn total_cents(&self) -> u32 {
        self.selected_plan
            .map(|plan| plan.price_cents(self.billing_cycle))
            .unwrap_or(0)
    }

    pub fn total_label(&self) -> String {
        format_cents(self.total_cents())
    }
}

fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Cosmetic card-number formatting: digits only, grouped in fours, capped at
/// sixteen digits.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(16)
        .collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cosmetic expiry formatting: digits only with a slash inserted after the
/// month, capped at `MM/YY`.
pub fn format_expire_date(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() >= 2 {
        let month: String = digits[..2].iter().collect();
        let year: String = digits[2..].iter().collect();
        format!("{month}/{year}")
    } else {
        digits.into_iter().collect()
    }
}

/// Cosmetic CVC formatting: digits only, capped at four.
pub fn format_cvc(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(4).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CardDraft {
        CardDraft {
            name: "Dana Cole".to_string(),
            number: "4242 4242 4242 9901".to_string(),
            expire_date: "04/27".to_string(),
            cvc: "123".to_string(),
        }
    }

    #[test]
    fn add_card_masks_all_but_last_four() {
        let mut checkout = CheckoutState::new();
        let card = checkout.add_card(draft()).expect("card saves");
        assert_eq!(card.masked_number, "******9901");
        assert_eq!(card.card_type, "Credit card");
        assert_eq!(card.id, "4");
        assert_eq!(checkout.cards().len(), 4);
    }

    #[test]
    fn add_card_rejects_incomplete_drafts() {
        let mut checkout = CheckoutState::new();
        let mut incomplete = draft();
        incomplete.cvc.clear();
        assert_eq!(
            checkout.add_card(incomplete).expect_err("rejected"),
            CheckoutError::IncompleteCard
        );

        let mut short = draft();
        short.number = "12 3".to_string();
        assert_eq!(
            checkout.add_card(short).expect_err("rejected"),
            CheckoutError::ShortCardNumber
        );
        assert_eq!(checkout.cards().len(), 3);
    }

    #[test]
    fn pay_requires_plan_and_card() {
        let mut checkout = CheckoutState::new();
        assert!(!checkout.can_pay());

        checkout.select_plan(PlanTier::Platinum);
        assert!(!checkout.can_pay());

        checkout.select_card("2").expect("fixture card exists");
        assert!(checkout.can_pay());

        assert_eq!(
            checkout.select_card("99").expect_err("unknown id"),
            CheckoutError::UnknownCard("99".to_string())
        );
    }

    #[test]
    fn total_follows_plan_and_billing_cycle() {
        let mut checkout = CheckoutState::new();
        assert_eq!(checkout.total_label(), "$0.00");

        checkout.select_plan(PlanTier::Regular);
        assert_eq!(checkout.total_label(), "$99.99");

        checkout.set_billing_cycle(BillingCycle::Annually);
        assert_eq!(checkout.total_label(), "$83.99");
        assert_eq!(checkout.total_cents(), 8_399);
    }

    #[test]
    fn card_number_grouping_caps_at_sixteen_digits() {
        assert_eq!(format_card_number("4242424242429901999"), "4242 4242 4242 9901");
        assert_eq!(format_card_number("42x42"), "4242");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn expiry_inserts_slash_after_month() {
        assert_eq!(format_expire_date("0427"), "04/27");
        assert_eq!(format_expire_date("04"), "04/");
        assert_eq!(format_expire_date("4"), "4");
        assert_eq!(format_expire_date("04/279"), "04/27");
    }

    #[test]
    fn cvc_keeps_digits_only() {
        assert_eq!(format_cvc("12a34"), "1234");
        assert_eq!(format_cvc("123456"), "1234");
    }
}
