use std::collections::BTreeMap;

use tracing::debug;

use super::domain::{Cardinality, CondominiumField, EntryPayload, FieldValue, RequirementTier};

/// Which add/edit dialog is visible and in what mode. Modeled as one tagged
/// variant so an edit index can never coexist with "adding" mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalSession {
    #[default]
    Closed,
    Adding {
        field: CondominiumField,
    },
    EditingSingle {
        field: CondominiumField,
        entry: EntryPayload,
    },
    EditingAt {
        field: CondominiumField,
        index: usize,
        entry: EntryPayload,
    },
}

impl ModalSession {
    pub fn open_field(&self) -> Option<CondominiumField> {
        match self {
            Self::Closed => None,
            Self::Adding { field }
            | Self::EditingSingle { field, .. }
            | Self::EditingAt { field, .. } => Some(*field),
        }
    }

    /// The entry being edited, used to pre-populate the modal inputs.
    pub fn editing_entry(&self) -> Option<&EntryPayload> {
        match self {
            Self::EditingSingle { entry, .. } | Self::EditingAt { entry, .. } => Some(entry),
            _ => None,
        }
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self {
            Self::EditingAt { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Errors raised by the condominium collection editor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CondominiumError {
    #[error("no modal is open to receive a submission")]
    ModalClosed,
    #[error("payload shape does not fit field '{field}'")]
    PayloadMismatch { field: CondominiumField },
    #[error("field '{field}' holds a single value, not an entry list")]
    NotMultiEntry { field: CondominiumField },
    #[error("field '{field}' is multi-entry; address one element by index")]
    NotSingleEntry { field: CondominiumField },
    #[error("index {index} is out of range for '{field}' ({len} entries)")]
    StaleIndex {
        field: CondominiumField,
        index: usize,
        len: usize,
    },
    #[error("required field '{field}' cannot be removed")]
    RequiredFieldRemoval { field: CondominiumField },
    #[error("batch submit is only valid while adding to a multi-entry field")]
    BatchOutsideAdd,
}

/// State for the condominium detail step: the field-keyed value map, the
/// single modal-session slot, and the show-errors flag.
#[derive(Debug, Default)]
pub struct CondominiumDetailForm {
    values: BTreeMap<CondominiumField, FieldValue>,
    session: ModalSession,
    show_errors: bool,
}

impl CondominiumDetailForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &ModalSession {
        &self.session
    }

    pub fn value(&self, field: CondominiumField) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn has_value(&self, field: CondominiumField) -> bool {
        self.values.contains_key(&field)
    }

    pub fn entry_count(&self, field: CondominiumField) -> usize {
        self.values
            .get(&field)
            .map(FieldValue::entry_count)
            .unwrap_or(0)
    }

    /// Open a modal to create a new entry. Always clears any stale edit state;
    /// an already-open modal for another field is implicitly closed first.
    pub fn open_for_add(&mut self, field: CondominiumField) {
        debug!(field = field.id(), "modal opened for add");
        self.session = ModalSession::Adding { field };
    }

    /// Open a single-entry field's modal seeded with its current value. A
    /// field with no stored value falls back to add mode.
    pub fn open_for_edit(&mut self, field: CondominiumField) -> Result<(), CondominiumError> {
        if field.cardinality() == Cardinality::Multiple {
            return Err(CondominiumError::NotSingleEntry { field });
        }

        match self.values.get(&field).and_then(FieldValue::single) {
            Some(entry) => {
                debug!(field = field.id(), "modal opened for edit");
                self.session = ModalSession::EditingSingle {
                    field,
                    entry: entry.clone(),
                };
            }
            None => self.open_for_add(field),
        }
        Ok(())
    }

    /// Open a multi-entry field's modal seeded with the entry at `index`.
    pub fn open_for_edit_at(
        &mut self,
        field: CondominiumField,
        index: usize,
    ) -> Result<(), CondominiumError> {
        let entries = self.entries(field)?;
        let entry = entries
            .get(index)
            .ok_or(CondominiumError::StaleIndex {
                field,
                index,
                len: entries.len(),
            })?
            .clone();

        debug!(field = field.id(), index, "modal opened for edit at index");
        self.session = ModalSession::EditingAt {
            field,
            index,
            entry,
        };
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.session = ModalSession::Closed;
    }

    /// Merge a submitted payload into the value map per the active session,
    /// then close the modal. Submit always closes on success.
    pub fn submit(&mut self, payload: EntryPayload) -> Result<(), CondominiumError> {
        let session = std::mem::take(&mut self.session);
        let Some(field) = session.open_field() else {
            return Err(CondominiumError::ModalClosed);
        };

        if !payload.matches(field) {
            self.session = session;
            return Err(CondominiumError::PayloadMismatch { field });
        }

        match field.cardinality() {
            Cardinality::Single => {
                self.values.insert(field, FieldValue::Single(payload));
            }
            Cardinality::Multiple => {
                if let Some(index) = session.editing_index() {
                    match self.entries_slot(field) {
                        Ok(Some(entries)) if index < entries.len() => entries[index] = payload,
                        // The list shrank while the modal was open. A failed
                        // submit keeps the modal open, same as a mismatch.
                        Ok(other) => {
                            let len = other.map_or(0, |entries| entries.len());
                            self.session = session;
                            return Err(CondominiumError::StaleIndex { field, index, len });
                        }
                        Err(error) => {
                            self.session = session;
                            return Err(error);
                        }
                    }
                } else {
                    self.push_entry(field, payload);
                }
            }
        }

        debug!(field = field.id(), "modal payload merged");
        Ok(())
    }

    /// Append a whole batch of entries at once. Only legal while adding to a
    /// multi-entry field; edits address exactly one element.
    pub fn submit_batch(
        &mut self,
        payloads: Vec<EntryPayload>,
    ) -> Result<(), CondominiumError> {
        let field = match &self.session {
            ModalSession::Adding { field } => *field,
            ModalSession::Closed => return Err(CondominiumError::ModalClosed),
            _ => return Err(CondominiumError::BatchOutsideAdd),
        };
        if field.cardinality() != Cardinality::Multiple {
            return Err(CondominiumError::NotMultiEntry { field });
        }
        if let Some(bad) = payloads.iter().find(|payload| !payload.matches(field)) {
            debug!(field = field.id(), ?bad, "rejected mismatched batch entry");
            return Err(CondominiumError::PayloadMismatch { field });
        }

        for payload in payloads {
            self.push_entry(field, payload);
        }
        self.session = ModalSession::Closed;
        Ok(())
    }

    /// Remove a field's value entirely. Gating fields cannot be removed.
    pub fn remove_field(&mut self, field: CondominiumField) -> Result<(), CondominiumError> {
        if field.requirement() == RequirementTier::Required {
            return Err(CondominiumError::RequiredFieldRemoval { field });
        }
        self.values.remove(&field);
        Ok(())
    }

    /// Remove one element from a multi-entry field. An emptied list drops the
    /// field key so "has data" checks report absent, not empty.
    pub fn remove_entry(
        &mut self,
        field: CondominiumField,
        index: usize,
    ) -> Result<(), CondominiumError> {
        let Some(entries) = self.entries_slot(field)? else {
            return Err(CondominiumError::StaleIndex {
                field,
                index,
                len: 0,
            });
        };
        if index >= entries.len() {
            return Err(CondominiumError::StaleIndex {
                field,
                index,
                len: entries.len(),
            });
        }
        entries.remove(index);
        if entries.is_empty() {
            self.values.remove(&field);
        }
        Ok(())
    }

    /// Flip on global error display. Monotonic within a step instance; a
    /// fresh form is the only way back to hidden errors.
    pub fn show_all_errors(&mut self) {
        self.show_errors = true;
    }

    pub fn show_errors(&self) -> bool {
        self.show_errors
    }

    /// Presence-only check over the gating fields. Internal shape of stored
    /// values is already guaranteed by the typed payloads.
    pub fn validation_errors(&self) -> BTreeMap<CondominiumField, &'static str> {
        CondominiumField::required_for_completion()
            .into_iter()
            .filter(|field| !self.has_value(*field))
            .map(|field| (field, field.missing_message()))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// Error for one field, gated by the show-errors flag.
    pub fn visible_error(&self, field: CondominiumField) -> Option<&'static str> {
        if !self.show_errors {
            return None;
        }
        self.validation_errors().get(&field).copied()
    }

    /// The merged value map as a structured JSON payload, keyed by field id.
    /// This is the shape a submission API would accept.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::to_value(&self.values).unwrap_or(serde_json::Value::Null)
    }

    fn entries(&self, field: CondominiumField) -> Result<&[EntryPayload], CondominiumError> {
        if field.cardinality() != Cardinality::Multiple {
            return Err(CondominiumError::NotMultiEntry { field });
        }
        match self.values.get(&field) {
            Some(FieldValue::Entries(entries)) => Ok(entries),
            Some(FieldValue::Single(_)) => Err(CondominiumError::NotMultiEntry { field }),
            None => Ok(&[]),
        }
    }

    /// Mutable entry list for a multi-entry field, without materializing a
    /// key for an absent one.
    fn entries_slot(
        &mut self,
        field: CondominiumField,
    ) -> Result<Option<&mut Vec<EntryPayload>>, CondominiumError> {
        if field.cardinality() != Cardinality::Multiple {
            return Err(CondominiumError::NotMultiEntry { field });
        }
        match self.values.get_mut(&field) {
            Some(FieldValue::Entries(entries)) => Ok(Some(entries)),
            Some(FieldValue::Single(_)) => Err(CondominiumError::NotMultiEntry { field }),
            None => Ok(None),
        }
    }

    fn push_entry(&mut self, field: CondominiumField, payload: EntryPayload) {
        match self
            .values
            .entry(field)
            .or_insert_with(|| FieldValue::Entries(Vec::new()))
        {
            FieldValue::Entries(entries) => entries.push(payload),
            // Unreachable for catalog fields: cardinality is checked upstream.
            value => *value = FieldValue::Entries(vec![payload]),
        }
    }
}
