use serde::{Deserialize, Serialize};
use std::fmt;

use crate::intake::profile::SelectOption;

/// The fields of the condominium detail step, each backed by its own modal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CondominiumField {
    PropertyAddress,
    LeasingInfo,
    Charges,
    RentFrequency,
    ApplicationAgreement,
    AboutProperty,
    CommunityAmenity,
    PetFees,
    Parking,
    EducationalInstitution,
    NearestStations,
    NearestLandmark,
    UtilitiesProvider,
}

/// Exactly one tier applies to each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementTier {
    Required,
    Recommended,
    Optional,
}

impl RequirementTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::Recommended => "Recommended",
            Self::Optional => "Optional",
        }
    }
}

/// Whether a field holds one value or an ordered list of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    Single,
    Multiple,
}

/// Static metadata view for one field, as a UI layer would render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub requirement: RequirementTier,
    pub cardinality: Cardinality,
    pub note: Option<&'static str>,
}

impl CondominiumField {
    pub const fn ordered() -> [Self; 13] {
        [
            Self::PropertyAddress,
            Self::LeasingInfo,
            Self::Charges,
            Self::RentFrequency,
            Self::ApplicationAgreement,
            Self::AboutProperty,
            Self::CommunityAmenity,
            Self::PetFees,
            Self::Parking,
            Self::EducationalInstitution,
            Self::NearestStations,
            Self::NearestLandmark,
            Self::UtilitiesProvider,
        ]
    }

    /// Left column of the two-column detail layout.
    pub const fn left_column() -> [Self; 7] {
        [
            Self::PropertyAddress,
            Self::LeasingInfo,
            Self::Charges,
            Self::RentFrequency,
            Self::ApplicationAgreement,
            Self::AboutProperty,
            Self::CommunityAmenity,
        ]
    }

    /// Right column of the two-column detail layout.
    pub const fn right_column() -> [Self; 6] {
        [
            Self::PetFees,
            Self::Parking,
            Self::EducationalInstitution,
            Self::NearestStations,
            Self::NearestLandmark,
            Self::UtilitiesProvider,
        ]
    }

    /// The four fields that gate the step transition to pricing.
    pub const fn required_for_completion() -> [Self; 4] {
        [
            Self::PropertyAddress,
            Self::LeasingInfo,
            Self::Charges,
            Self::RentFrequency,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::PropertyAddress => "property-address",
            Self::LeasingInfo => "leasing-info",
            Self::Charges => "charges",
            Self::RentFrequency => "rent-frequency",
            Self::ApplicationAgreement => "application-agreement",
            Self::AboutProperty => "about-property",
            Self::CommunityAmenity => "community-amenity",
            Self::PetFees => "pet-fees",
            Self::Parking => "parking",
            Self::EducationalInstitution => "educational-institution",
            Self::NearestStations => "nearest-stations",
            Self::NearestLandmark => "nearest-landmark",
            Self::UtilitiesProvider => "utilities-provider",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PropertyAddress => "Property address",
            Self::LeasingInfo => "Leasing info",
            Self::Charges => "Charges",
            Self::RentFrequency => "Rent frequency & payment reminder",
            Self::ApplicationAgreement => "Application agreement",
            Self::AboutProperty => "About the property",
            Self::CommunityAmenity => "Community's amenity/features",
            Self::PetFees => "Pet fees",
            Self::Parking => "Parking",
            Self::EducationalInstitution => "Nearest educational institution",
            Self::NearestStations => "Nearest stations",
            Self::NearestLandmark => "Nearest landmark",
            Self::UtilitiesProvider => "Utilities provider",
        }
    }

    pub const fn requirement(self) -> RequirementTier {
        match self {
            Self::PropertyAddress | Self::LeasingInfo | Self::Charges | Self::RentFrequency => {
                RequirementTier::Required
            }
            Self::CommunityAmenity
            | Self::EducationalInstitution
            | Self::NearestStations
            | Self::NearestLandmark
            | Self::UtilitiesProvider => RequirementTier::Recommended,
            Self::ApplicationAgreement | Self::AboutProperty | Self::PetFees | Self::Parking => {
                RequirementTier::Optional
            }
        }
    }

    /// Cardinality is an explicit attribute of the descriptor so the merge
    /// logic and the catalog cannot drift apart.
    pub const fn cardinality(self) -> Cardinality {
        match self {
            Self::PetFees
            | Self::EducationalInstitution
            | Self::NearestStations
            | Self::NearestLandmark
            | Self::UtilitiesProvider => Cardinality::Multiple,
            _ => Cardinality::Single,
        }
    }

    pub const fn note(self) -> Option<&'static str> {
        match self {
            Self::PetFees => Some("add fees if you allow pet"),
            _ => None,
        }
    }

    pub const fn descriptor(self) -> FieldDescriptor {
        FieldDescriptor {
            id: self.id(),
            label: self.label(),
            requirement: self.requirement(),
            cardinality: self.cardinality(),
            note: self.note(),
        }
    }

    /// Message shown when a gating field is still empty on "Next".
    pub const fn missing_message(self) -> &'static str {
        match self {
            Self::PropertyAddress => "Property address information is required",
            Self::LeasingInfo => "Leasing manager information is required",
            Self::Charges => "Application and admin fee information is required",
            Self::RentFrequency => "Rent payment frequency and due dates are required",
            _ => "This field is required",
        }
    }
}

impl fmt::Display for CondominiumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Street-level identification of the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAddress {
    pub property_name: String,
    pub total_units: String,
    pub website: Option<String>,
    pub country: String,
    pub street_address: String,
    pub apt_unit: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl PropertyAddress {
    /// First display line: name, state, website, unit count.
    pub fn headline(&self) -> String {
        let website = self.website.as_deref().unwrap_or("");
        format!(
            "{}, {} / {}, Total unit {}",
            self.property_name, self.state, website, self.total_units
        )
    }

    /// Second display line: the full postal address.
    pub fn address_line(&self) -> String {
        let apt = match self.apt_unit.as_deref() {
            Some(unit) if !unit.is_empty() => format!(", {unit}"),
            _ => String::new(),
        };
        format!(
            "{}{}, {}, {} {}, {}",
            self.street_address, apt, self.city, self.state, self.zip_code, self.country
        )
    }
}

/// Leasing manager contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeasingInfo {
    pub manager_name: String,
    pub country_code: String,
    pub phone_number: String,
    pub email: String,
    pub address_same_as_property: bool,
}

impl LeasingInfo {
    pub fn manager_line(&self) -> String {
        format!("{}, {}", self.manager_name, self.email)
    }

    pub fn phone(&self) -> String {
        format!("{}{}", self.country_code, self.phone_number)
    }

    pub const fn address_label(&self) -> &'static str {
        if self.address_same_as_property {
            "Address same as property"
        } else {
            "Custom address"
        }
    }
}

/// One-time application and admin fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeSchedule {
    pub application_fee: String,
    pub applicant_type: String,
    pub admin_fee: String,
}

impl ChargeSchedule {
    pub fn summary(&self) -> String {
        format!(
            "${}/{}, Admin fee ${}",
            self.application_fee, self.applicant_type, self.admin_fee
        )
    }
}

/// Rent cadence plus reminder and due dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentSchedule {
    pub frequency: String,
    pub reminder: String,
    pub due: String,
}

impl Default for RentSchedule {
    fn default() -> Self {
        Self {
            frequency: "Monthly".to_string(),
            reminder: "25th Every month".to_string(),
            due: "5th Every month".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationAgreement {
    pub document: String,
    pub accept_international: bool,
}

impl Default for ApplicationAgreement {
    fn default() -> Self {
        Self {
            document: "Agreement.pdf".to_string(),
            accept_international: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingInfo {
    pub guest_time: String,
    pub overview: String,
}

impl Default for ParkingInfo {
    fn default() -> Self {
        Self {
            guest_time: "2H".to_string(),
            overview: "Parking overview not provided".to_string(),
        }
    }
}

/// One pet-fee schedule row. Amounts are kept as entered; formatting happens
/// in the display helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetFeeEntry {
    pub pet_type: String,
    pub max_weight_lb: String,
    pub one_time_fee: String,
    pub security_deposit: String,
    pub monthly_rent: String,
}

impl PetFeeEntry {
    pub fn summary(&self) -> String {
        format!(
            "{}, Max weight: {}lb, Monthly pet rent: ${}",
            self.pet_type, self.max_weight_lb, self.monthly_rent
        )
    }
}

/// Shared shape for nearby educational institutions, stations, and landmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyPlaceEntry {
    pub kind: String,
    pub name: String,
    pub distance: String,
    pub distance_unit: String,
}

impl NearbyPlaceEntry {
    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {}{}",
            self.kind, self.name, self.distance, self.distance_unit
        )
    }

    pub fn distance_label(&self) -> String {
        format!("{} {}", self.distance, self.distance_unit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityProviderEntry {
    pub utility_type: String,
    pub provider_name: String,
}

impl UtilityProviderEntry {
    pub fn summary(&self) -> String {
        format!("{} - {}", self.utility_type, self.provider_name)
    }
}

/// Fixed catalog backing the community amenity picker. Selection state is
/// keyed by the stable id; the stored value holds the display labels.
pub const AMENITY_OPTIONS: [SelectOption; 15] = [
    SelectOption {
        value: "air-conditioning",
        label: "Air conditioning",
    },
    SelectOption {
        value: "cable-ready",
        label: "Cable ready",
    },
    SelectOption {
        value: "ceiling-fan",
        label: "Ceiling fan",
    },
    SelectOption {
        value: "high-ceilings",
        label: "High ceilings",
    },
    SelectOption {
        value: "private-balcony",
        label: "Private balcony",
    },
    SelectOption {
        value: "refrigerator",
        label: "Refrigerator",
    },
    SelectOption {
        value: "wooded-views",
        label: "Wooded views",
    },
    SelectOption {
        value: "wd-hookup",
        label: "W/D hookup",
    },
    SelectOption {
        value: "hardwood-floor",
        label: "Hardwood Floor (home)",
    },
    SelectOption {
        value: "fireplace",
        label: "Fireplace (home)",
    },
    SelectOption {
        value: "first-aid",
        label: "First aid kit",
    },
    SelectOption {
        value: "carbon-monoxide",
        label: "Carbon monoxide alarm",
    },
    SelectOption {
        value: "expanded-patios",
        label: "Expanded patios (home)",
    },
    SelectOption {
        value: "free-parking",
        label: "Free parking on premises",
    },
    SelectOption {
        value: "fire-extinguisher",
        label: "Fire extinguisher",
    },
];

pub fn amenity_label(id: &str) -> Option<&'static str> {
    AMENITY_OPTIONS
        .iter()
        .find(|option| option.value == id)
        .map(|option| option.label)
}

pub fn amenity_id(label: &str) -> Option<&'static str> {
    AMENITY_OPTIONS
        .iter()
        .find(|option| option.label == label)
        .map(|option| option.value)
}

/// Map selected ids to the labels stored in the field value. Ids outside the
/// catalog are dropped.
pub fn amenity_labels(ids: &[&str]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| amenity_label(id))
        .map(str::to_string)
        .collect()
}

/// Recover selection ids from stored labels when re-opening the modal for
/// edit. Labels outside the catalog are dropped.
pub fn amenity_ids(labels: &[String]) -> Vec<&'static str> {
    labels
        .iter()
        .filter_map(|label| amenity_id(label))
        .collect()
}

/// Tagged payload produced by a modal submit, one variant per entity shape.
///
/// `Place` covers the three nearby-place fields, which share a record shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntryPayload {
    Address(PropertyAddress),
    Leasing(LeasingInfo),
    Charges(ChargeSchedule),
    Schedule(RentSchedule),
    Agreement(ApplicationAgreement),
    Description(String),
    Amenities(Vec<String>),
    Parking(ParkingInfo),
    PetFee(PetFeeEntry),
    Place(NearbyPlaceEntry),
    Utility(UtilityProviderEntry),
}

impl EntryPayload {
    /// Whether this payload shape is legal for `field`.
    pub fn matches(&self, field: CondominiumField) -> bool {
        matches!(
            (self, field),
            (Self::Address(_), CondominiumField::PropertyAddress)
                | (Self::Leasing(_), CondominiumField::LeasingInfo)
                | (Self::Charges(_), CondominiumField::Charges)
                | (Self::Schedule(_), CondominiumField::RentFrequency)
                | (Self::Agreement(_), CondominiumField::ApplicationAgreement)
                | (Self::Description(_), CondominiumField::AboutProperty)
                | (Self::Amenities(_), CondominiumField::CommunityAmenity)
                | (Self::Parking(_), CondominiumField::Parking)
                | (Self::PetFee(_), CondominiumField::PetFees)
                | (Self::Place(_), CondominiumField::EducationalInstitution)
                | (Self::Place(_), CondominiumField::NearestStations)
                | (Self::Place(_), CondominiumField::NearestLandmark)
                | (Self::Utility(_), CondominiumField::UtilitiesProvider)
        )
    }

    /// One-line display text for a stored entry.
    pub fn summary(&self) -> String {
        match self {
            Self::Address(address) => address.headline(),
            Self::Leasing(info) => format!("Leasing manager: {}", info.manager_line()),
            Self::Charges(charges) => format!("Application fee: {}", charges.summary()),
            Self::Schedule(schedule) => {
                format!("Rent payment frequency: {}", schedule.frequency)
            }
            Self::Agreement(agreement) => agreement.document.clone(),
            Self::Description(text) => text.clone(),
            Self::Amenities(items) => items.join(", "),
            Self::Parking(parking) => {
                format!("Guest vehicle parking time: {}", parking.guest_time)
            }
            Self::PetFee(entry) => entry.summary(),
            Self::Place(entry) => entry.summary(),
            Self::Utility(entry) => entry.summary(),
        }
    }
}

/// Stored value for one field: a single payload or an ordered entry list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(EntryPayload),
    Entries(Vec<EntryPayload>),
}

impl FieldValue {
    pub fn entry_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Entries(entries) => entries.len(),
        }
    }

    pub fn entries(&self) -> Option<&[EntryPayload]> {
        match self {
            Self::Single(_) => None,
            Self::Entries(entries) => Some(entries),
        }
    }

    pub fn single(&self) -> Option<&EntryPayload> {
        match self {
            Self::Single(payload) => Some(payload),
            Self::Entries(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_exactly_one_requirement_tier() {
        // The tier enum makes the "exactly one of required/optional/recommended"
        // convention structural; this just pins the catalog split.
        let required: Vec<_> = CondominiumField::ordered()
            .into_iter()
            .filter(|field| field.requirement() == RequirementTier::Required)
            .collect();
        assert_eq!(
            required,
            CondominiumField::required_for_completion().to_vec()
        );
    }

    #[test]
    fn multi_entry_catalog_matches_fixed_set() {
        let multi: Vec<_> = CondominiumField::ordered()
            .into_iter()
            .filter(|field| field.cardinality() == Cardinality::Multiple)
            .map(CondominiumField::id)
            .collect();
        assert_eq!(
            multi,
            vec![
                "pet-fees",
                "educational-institution",
                "nearest-stations",
                "nearest-landmark",
                "utilities-provider",
            ]
        );
    }

    #[test]
    fn columns_cover_the_catalog_without_overlap() {
        let mut seen: Vec<CondominiumField> = CondominiumField::left_column().to_vec();
        seen.extend(CondominiumField::right_column());
        seen.sort();
        let mut all = CondominiumField::ordered().to_vec();
        all.sort();
        assert_eq!(seen, all);
    }

    #[test]
    fn place_payload_matches_all_three_place_fields() {
        let entry = EntryPayload::Place(NearbyPlaceEntry {
            kind: "Museum".to_string(),
            name: "Science Hall".to_string(),
            distance: "1.2".to_string(),
            distance_unit: "mi".to_string(),
        });
        assert!(entry.matches(CondominiumField::NearestLandmark));
        assert!(entry.matches(CondominiumField::NearestStations));
        assert!(entry.matches(CondominiumField::EducationalInstitution));
        assert!(!entry.matches(CondominiumField::UtilitiesProvider));
    }

    #[test]
    fn address_display_lines_join_name_state_and_postal_parts() {
        let address = PropertyAddress {
            property_name: "Lakeview Gardens".to_string(),
            total_units: "24".to_string(),
            website: Some("lakeview.example".to_string()),
            country: "United States".to_string(),
            street_address: "410 Elm St".to_string(),
            apt_unit: None,
            city: "Irving".to_string(),
            state: "TX".to_string(),
            zip_code: "75061".to_string(),
        };
        assert_eq!(
            address.headline(),
            "Lakeview Gardens, TX / lakeview.example, Total unit 24"
        );
        assert_eq!(
            address.address_line(),
            "410 Elm St, Irving, TX 75061, United States"
        );
    }

    #[test]
    fn amenity_catalog_round_trips_ids_and_labels() {
        assert_eq!(AMENITY_OPTIONS.len(), 15);
        assert_eq!(AMENITY_OPTIONS[0].value, "air-conditioning");
        assert_eq!(AMENITY_OPTIONS[14].label, "Fire extinguisher");

        assert_eq!(amenity_label("wd-hookup"), Some("W/D hookup"));
        assert_eq!(amenity_id("Fireplace (home)"), Some("fireplace"));
        assert_eq!(amenity_label("sauna"), None);

        // Unknown entries fall out of both conversions.
        let labels = amenity_labels(&["free-parking", "sauna", "carbon-monoxide"]);
        assert_eq!(
            labels,
            vec!["Free parking on premises", "Carbon monoxide alarm"]
        );
        assert_eq!(
            amenity_ids(&labels),
            vec!["free-parking", "carbon-monoxide"]
        );
    }

    #[test]
    fn pet_fee_summary_formats_units_and_currency() {
        let entry = PetFeeEntry {
            pet_type: "Dog".to_string(),
            max_weight_lb: "100".to_string(),
            one_time_fee: "100".to_string(),
            security_deposit: "150".to_string(),
            monthly_rent: "50".to_string(),
        };
        assert_eq!(
            entry.summary(),
            "Dog, Max weight: 100lb, Monthly pet rent: $50"
        );
    }
}
