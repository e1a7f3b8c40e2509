use super::*;
use shared::protocol::{ChairpersonRecord, PreceptorRecord};

fn committee_form() -> RecordForm<CommitteeFields> {
    RecordForm::new(CommitteeFields::default())
}

fn stored_committee(color: Option<&str>) -> CommitteeRecord {
    CommitteeRecord {
        id: RecordId::new("s1"),
        committee: "સ્વાગત સમિતિ".into(),
        name: "Kiran".into(),
        number: "9988776655".into(),
        color: color.map(str::to_string),
    }
}

#[test]
fn phone_field_strips_non_digits_and_truncates() {
    let mut form: RecordForm<ContactFields<PreceptorRecord>> =
        RecordForm::new(ContactFields::default());

    form.set(ContactField::Number, "abc123def4567");
    assert_eq!(form.fields().number, "1234567");
    assert_eq!(form.phone_hint(), "7/10 digits");
    assert!(form.phone_has_error());

    form.set(ContactField::Number, "+91 98765-43210 ext 5");
    assert_eq!(form.fields().number, "9198765432");
    assert!(!form.phone_has_error());
}

#[test]
fn other_fields_pass_through_unchanged() {
    let mut form = committee_form();
    form.set(CommitteeField::Name, "  Anil 42 ");
    assert_eq!(form.fields().name, "  Anil 42 ");
}

#[test]
fn contact_submit_requires_name_and_ten_digit_phone() {
    let mut form: RecordForm<ContactFields<ChairpersonRecord>> =
        RecordForm::new(ContactFields::default());
    assert!(!form.can_submit());
    assert_eq!(form.validate(), Err(FormError::MissingField("name")));

    form.set(ContactField::Name, "Mehul");
    assert_eq!(form.validate(), Err(FormError::MissingField("number")));

    form.set(ContactField::Number, "900000000");
    assert_eq!(form.validate(), Err(FormError::InvalidPhone { len: 9 }));

    form.set(ContactField::Number, "9000000001");
    assert!(form.can_submit());
    assert_eq!(
        form.validate(),
        Ok(ContactDraft {
            name: "Mehul".into(),
            number: "9000000001".into(),
        })
    );
}

#[test]
fn required_fields_only_reject_the_empty_string() {
    let mut form: RecordForm<ContactFields<PreceptorRecord>> =
        RecordForm::new(ContactFields::default());
    form.set(ContactField::Number, "9000000001");
    assert_eq!(form.validate(), Err(FormError::MissingField("name")));

    form.set(ContactField::Name, "   ");
    assert!(form.can_submit());
    assert_eq!(form.validate().expect("valid").name, "   ");
}

#[test]
fn committee_submit_also_requires_color_and_catalog_member() {
    let mut form = committee_form();
    form.set(CommitteeField::Committee, "સ્વાગત સમિતિ");
    form.set(CommitteeField::Name, "Kiran");
    form.set(CommitteeField::Number, "9988776655");
    assert_eq!(form.validate(), Err(FormError::MissingField("color")));

    form.set(CommitteeField::Color, "green");
    assert_eq!(
        form.validate(),
        Err(FormError::UnknownColor("green".into()))
    );

    form.set(CommitteeField::Color, "purple");
    let draft = form.validate().expect("valid");
    assert_eq!(draft.color, "#9f2886");

    form.set(CommitteeField::Committee, "Unlisted");
    assert_eq!(
        form.validate(),
        Err(FormError::UnknownCommittee("Unlisted".into()))
    );
}

#[test]
fn custom_catalog_governs_committee_names() {
    let mut form = RecordForm::new(CommitteeFields::with_catalog(CommitteeCatalog::new([
        "Stage",
    ])));
    form.set(CommitteeField::Committee, "Stage");
    form.set(CommitteeField::Name, "Kiran");
    form.set(CommitteeField::Number, "9988776655");
    form.set(CommitteeField::Color, "blue");
    assert!(form.can_submit());

    form.begin(None);
    assert_eq!(form.fields().catalog.names(), ["Stage".to_string()]);
    assert!(form.fields().committee.is_empty());
}

#[test]
fn begin_with_record_reverse_maps_stored_hex() {
    let mut form = committee_form();
    let record = stored_committee(Some("#392d74"));
    form.begin(Some(&record));

    assert_eq!(form.editing_id(), Some(&RecordId::new("s1")));
    assert_eq!(form.fields().color, "blue");
    assert_eq!(form.fields().committee, "સ્વાગત સમિતિ");
    assert!(form.can_submit());
}

#[test]
fn begin_with_unknown_hex_needs_a_new_color() {
    let mut form = committee_form();
    form.begin(Some(&stored_committee(Some("#abcdef"))));
    assert_eq!(form.fields().color, "unknown");
    assert!(!form.can_submit());

    form.begin(Some(&stored_committee(Some("purple"))));
    assert_eq!(form.fields().color, "purple");

    form.begin(Some(&stored_committee(None)));
    assert_eq!(form.fields().color, "");
}

#[test]
fn begin_none_resets_to_blank_and_unbinds_id() {
    let mut form = committee_form();
    form.begin(Some(&stored_committee(Some("#392d74"))));
    form.begin(None);

    assert!(!form.is_editing());
    assert!(form.fields().name.is_empty());
    assert!(form.fields().number.is_empty());
    assert!(form.fields().color.is_empty());
}

#[test]
fn submit_gate_matches_field_rules() {
    let names = ["", "Asha"];
    let numbers = ["", "12345", "1234567890"];
    for name in names {
        for number in numbers {
            let mut form: RecordForm<ContactFields<PreceptorRecord>> =
                RecordForm::new(ContactFields::default());
            form.set(ContactField::Name, name);
            form.set(ContactField::Number, number);
            let expected = !name.is_empty() && number.len() == 10;
            assert_eq!(form.can_submit(), expected, "name={name:?} number={number:?}");
        }
    }
}
