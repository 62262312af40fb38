//! Headless state engine for the property listing intake wizard.
//!
//! The crate models the three intake steps (initial form, condominium detail,
//! pricing) as plain in-memory state machines so a UI layer can drive them
//! without owning any validation or merge logic itself. Nothing here performs
//! I/O: the final merged payload is handed back to the caller for submission.

pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
