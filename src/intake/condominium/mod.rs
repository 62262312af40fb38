//! Condominium detail step: typed field catalog, entry payloads, and the
//! modal-driven collection editor.

pub mod domain;
mod form;

pub use domain::{
    amenity_id, amenity_ids, amenity_label, amenity_labels, ApplicationAgreement, Cardinality,
    ChargeSchedule, CondominiumField, EntryPayload, FieldDescriptor, FieldValue, LeasingInfo,
    NearbyPlaceEntry, ParkingInfo, PetFeeEntry, PropertyAddress, RentSchedule, RequirementTier,
    UtilityProviderEntry, AMENITY_OPTIONS,
};
pub use form::{CondominiumDetailForm, CondominiumError, ModalSession};
