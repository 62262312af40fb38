use listing_intake::intake::condominium::{
    CondominiumDetailForm, CondominiumError, CondominiumField, EntryPayload, FieldValue,
    ModalSession, NearbyPlaceEntry, PetFeeEntry, UtilityProviderEntry,
};

fn pet(pet_type: &str) -> EntryPayload {
    EntryPayload::PetFee(PetFeeEntry {
        pet_type: pet_type.to_string(),
        max_weight_lb: "60".to_string(),
        one_time_fee: "100".to_string(),
        security_deposit: "150".to_string(),
        monthly_rent: "40".to_string(),
    })
}

fn station(name: &str) -> EntryPayload {
    EntryPayload::Place(NearbyPlaceEntry {
        kind: "Train".to_string(),
        name: name.to_string(),
        distance: "0.8".to_string(),
        distance_unit: "mi".to_string(),
    })
}

fn seeded_pets(names: &[&str]) -> CondominiumDetailForm {
    let mut form = CondominiumDetailForm::new();
    for name in names {
        form.open_for_add(CondominiumField::PetFees);
        form.submit(pet(name)).expect("pet entry merges");
    }
    form
}

#[test]
fn add_edit_and_delete_cycle_over_one_entry_list() {
    let mut form = seeded_pets(&["Dog", "Cat"]);
    assert_eq!(form.entry_count(CondominiumField::PetFees), 2);

    form.open_for_edit_at(CondominiumField::PetFees, 0)
        .expect("first entry editable");
    form.submit(pet("Bird")).expect("edit merges in place");
    let entries = form
        .value(CondominiumField::PetFees)
        .and_then(FieldValue::entries)
        .expect("list stored");
    assert!(matches!(
        &entries[0],
        EntryPayload::PetFee(entry) if entry.pet_type == "Bird"
    ));
    assert_eq!(entries.len(), 2);

    form.remove_entry(CondominiumField::PetFees, 1)
        .expect("second entry removable");
    assert_eq!(form.entry_count(CondominiumField::PetFees), 1);

    form.remove_entry(CondominiumField::PetFees, 0)
        .expect("last entry removable");
    assert!(!form.has_value(CondominiumField::PetFees));
}

#[test]
fn batch_submit_extends_an_existing_list() {
    let mut form = seeded_pets(&["Dog"]);
    form.open_for_add(CondominiumField::NearestStations);
    form.submit_batch(vec![station("Union"), station("Central")])
        .expect("batch of stations merges");

    assert_eq!(form.entry_count(CondominiumField::NearestStations), 2);
    assert!(matches!(form.session(), ModalSession::Closed));

    form.open_for_edit_at(CondominiumField::NearestStations, 1)
        .expect("second station editable");
    assert_eq!(
        form.session().editing_entry().map(EntryPayload::summary),
        Some("Train, Central, 0.8mi".to_string())
    );
    form.close_modal();
    assert_eq!(form.entry_count(CondominiumField::NearestStations), 2);
}

#[test]
fn batch_submit_is_rejected_outside_add_mode() {
    let mut form = seeded_pets(&["Dog"]);

    let closed = form.submit_batch(vec![pet("Cat")]);
    assert_eq!(closed, Err(CondominiumError::ModalClosed));

    form.open_for_edit_at(CondominiumField::PetFees, 0)
        .expect("entry editable");
    let editing = form.submit_batch(vec![pet("Cat")]);
    assert_eq!(editing, Err(CondominiumError::BatchOutsideAdd));
}

#[test]
fn mismatched_payload_keeps_the_modal_open() {
    let mut form = CondominiumDetailForm::new();
    form.open_for_add(CondominiumField::UtilitiesProvider);

    let result = form.submit(pet("Dog"));
    assert_eq!(
        result,
        Err(CondominiumError::PayloadMismatch {
            field: CondominiumField::UtilitiesProvider
        })
    );
    assert!(form.session().is_open(), "failed submit must not close");

    form.submit(EntryPayload::Utility(UtilityProviderEntry {
        utility_type: "Electricity".to_string(),
        provider_name: "Reliant".to_string(),
    }))
    .expect("matching payload merges");
    assert!(matches!(form.session(), ModalSession::Closed));
}

#[test]
fn stale_edit_index_is_reported_with_current_length() {
    let mut form = seeded_pets(&["Dog", "Cat"]);

    let result = form.open_for_edit_at(CondominiumField::PetFees, 5);
    assert_eq!(
        result,
        Err(CondominiumError::StaleIndex {
            field: CondominiumField::PetFees,
            index: 5,
            len: 2,
        })
    );

    // List shrinks while the modal is open; the submit must not land on a
    // different entry.
    form.open_for_edit_at(CondominiumField::PetFees, 1)
        .expect("second entry editable");
    form.remove_entry(CondominiumField::PetFees, 1)
        .expect("entry removable");
    form.remove_entry(CondominiumField::PetFees, 0)
        .expect("entry removable");
    let result = form.submit(pet("Bird"));
    assert_eq!(
        result,
        Err(CondominiumError::StaleIndex {
            field: CondominiumField::PetFees,
            index: 1,
            len: 0,
        })
    );
    // The failed submit keeps the edit session open, like a mismatch does.
    assert!(form.session().is_open());
    assert_eq!(form.session().editing_index(), Some(1));
}

#[test]
fn opening_a_new_modal_replaces_the_previous_session() {
    let mut form = seeded_pets(&["Dog"]);
    form.open_for_edit_at(CondominiumField::PetFees, 0)
        .expect("entry editable");
    form.open_for_add(CondominiumField::UtilitiesProvider);

    assert_eq!(
        form.session().open_field(),
        Some(CondominiumField::UtilitiesProvider)
    );
    assert_eq!(form.session().editing_index(), None);
}

#[test]
fn required_fields_resist_removal() {
    let mut form = CondominiumDetailForm::new();
    assert_eq!(
        form.remove_field(CondominiumField::Charges),
        Err(CondominiumError::RequiredFieldRemoval {
            field: CondominiumField::Charges
        })
    );

    form.open_for_add(CondominiumField::AboutProperty);
    form.submit(EntryPayload::Description("Quiet building".to_string()))
        .expect("description merges");
    assert!(form.has_value(CondominiumField::AboutProperty));
    form.remove_field(CondominiumField::AboutProperty)
        .expect("optional field removable");
    assert!(!form.has_value(CondominiumField::AboutProperty));
}
