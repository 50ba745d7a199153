use chrono::NaiveDate;
use rolodex_core::{
    Birthday, ContactBook, ContactBookError, FieldValidationError, Name, Phone, Record,
};
use std::collections::BTreeSet;

fn record(name: &str, phone: &str) -> Record {
    let name = Name::new(name, &BTreeSet::new()).expect("name should validate");
    let phone = Phone::new(phone).expect("phone should validate");
    Record::new(name, phone)
}

#[test]
fn add_rejects_second_record_with_same_name() {
    let mut book = ContactBook::new();
    book.add_record(record("alice", "0501234567")).unwrap();

    let err = book.add_record(record("alice", "0507654321")).unwrap_err();
    assert!(matches!(err, ContactBookError::DuplicateContact(name) if name == "alice"));
    assert_eq!(book.len(), 1);
}

#[test]
fn get_and_remove_fail_for_absent_names() {
    let mut book = ContactBook::new();

    assert!(matches!(
        book.get("ghost").unwrap_err(),
        ContactBookError::ContactNotFound(name) if name == "ghost"
    ));
    assert!(matches!(
        book.remove("ghost").unwrap_err(),
        ContactBookError::ContactNotFound(_)
    ));
}

#[test]
fn rename_moves_record_under_new_key_and_preserves_fields() {
    let mut book = ContactBook::new();
    let name = Name::new("alice", &book.names()).unwrap();
    let phone = Phone::new("+38(050)1234567").unwrap();
    let birthday = Birthday::new(NaiveDate::from_ymd_opt(1990, 5, 4).unwrap()).unwrap();
    book.add_record(Record::with_details(name, phone, Some(birthday), None, None))
        .unwrap();

    let confirmation = book.rename("alice", "bob").unwrap();
    assert!(confirmation.contains("bob"));

    assert!(book.get("alice").is_err());
    let renamed = book.get("bob").unwrap();
    assert_eq!(renamed.name().as_str(), "bob");
    assert_eq!(renamed.phone().numbers(), ["380501234567"]);
    assert_eq!(
        renamed.birthday().map(|b| b.date()),
        NaiveDate::from_ymd_opt(1990, 5, 4)
    );
}

#[test]
fn rename_to_taken_name_fails_and_leaves_book_unchanged() {
    let mut book = ContactBook::new();
    book.add_record(record("alice", "0501234567")).unwrap();
    book.add_record(record("bob", "0507654321")).unwrap();

    let err = book.rename("alice", "bob").unwrap_err();
    assert!(matches!(
        err,
        ContactBookError::Field(FieldValidationError::DuplicateName(_))
    ));
    assert!(book.get("alice").is_ok());
    assert!(book.get("bob").is_ok());
    assert_eq!(book.len(), 2);
}

#[test]
fn rename_of_absent_contact_fails_before_any_mutation() {
    let mut book = ContactBook::new();
    book.add_record(record("alice", "0501234567")).unwrap();

    let err = book.rename("ghost", "carol").unwrap_err();
    assert!(matches!(err, ContactBookError::ContactNotFound(_)));
    assert_eq!(book.len(), 1);
}

#[test]
fn change_phone_replaces_existing_number() {
    let mut book = ContactBook::new();
    book.add_record(record("carol", "0501112233")).unwrap();

    book.change_phone("carol", "0501112233", "0509998877")
        .unwrap();
    assert_eq!(book.get("carol").unwrap().phone().numbers(), ["0509998877"]);
}

#[test]
fn change_phone_fails_for_unknown_old_number() {
    let mut book = ContactBook::new();
    book.add_record(record("carol", "0501112233")).unwrap();

    let err = book
        .change_phone("carol", "0000000", "0509998877")
        .unwrap_err();
    assert!(matches!(err, ContactBookError::PhoneNotFound { .. }));
    assert_eq!(book.get("carol").unwrap().phone().numbers(), ["0501112233"]);
}

#[test]
fn change_phone_validates_replacement_format() {
    let mut book = ContactBook::new();
    book.add_record(record("carol", "0501112233")).unwrap();

    let err = book.change_phone("carol", "0501112233", "12ab").unwrap_err();
    assert!(matches!(
        err,
        ContactBookError::Field(FieldValidationError::BadPhoneFormat(_))
    ));
}

#[test]
fn change_birthday_rejects_impossible_and_future_dates() {
    let mut book = ContactBook::new();
    book.add_record(record("carol", "0501112233")).unwrap();

    let err = book.change_birthday("carol", 2020, 2, 31).unwrap_err();
    assert!(matches!(
        err,
        ContactBookError::InvalidDate {
            year: 2020,
            month: 2,
            day: 31
        }
    ));

    let err = book.change_birthday("carol", 9999, 1, 1).unwrap_err();
    assert!(matches!(
        err,
        ContactBookError::Field(FieldValidationError::FutureBirthday(_))
    ));
}

#[test]
fn change_birthday_sets_validated_date() {
    let mut book = ContactBook::new();
    book.add_record(record("carol", "0501112233")).unwrap();

    let confirmation = book.change_birthday("carol", 1990, 5, 4).unwrap();
    assert!(confirmation.contains("1990-05-04"));
    assert_eq!(
        book.get("carol").unwrap().birthday().map(|b| b.date()),
        NaiveDate::from_ymd_opt(1990, 5, 4)
    );

    let err = book.change_birthday("ghost", 1990, 5, 4).unwrap_err();
    assert!(matches!(err, ContactBookError::ContactNotFound(_)));
}

#[test]
fn change_email_and_address_replace_fields() {
    let mut book = ContactBook::new();
    book.add_record(record("carol", "0501112233")).unwrap();

    let err = book.change_email("carol", "not-an-email").unwrap_err();
    assert!(matches!(
        err,
        ContactBookError::Field(FieldValidationError::BadEmailFormat(_))
    ));

    book.change_email("carol", "carol.doe@example.com").unwrap();
    book.change_address("carol", "12 Main St").unwrap();

    let described = book.get("carol").unwrap().describe();
    assert!(described.contains("Email:\tcarol.doe@example.com"));
    assert!(described.contains("Address:\t12 Main St"));
}

#[test]
fn describe_renders_not_set_for_absent_optional_fields() {
    let mut book = ContactBook::new();
    book.add_record(record("dave", "0501234567")).unwrap();

    let described = book.get("dave").unwrap().describe();
    assert!(described.contains("Name:\tDave"));
    assert!(described.contains("Phone:\t0501234567"));
    assert!(described.contains("Birthday:\tnot set"));
    assert!(described.contains("Address:\tnot set"));
    assert!(described.contains("Email:\tnot set"));
}

#[test]
fn describe_all_covers_every_record() {
    let mut book = ContactBook::new();
    book.add_record(record("alice", "0501234567")).unwrap();
    book.add_record(record("bob", "0507654321")).unwrap();

    let described = book.describe_all();
    assert!(described.contains("Name:\tAlice"));
    assert!(described.contains("Name:\tBob"));
}
