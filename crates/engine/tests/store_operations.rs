//! Integration tests for the store operations
//!
//! Each test drives the string-typed API the console uses and checks
//! both the result and that rejected calls left the collections alone.

use chrono::NaiveDate;
use parceldb_core::record::{PackageDetail, PackageKind, Role, Specification};
use parceldb_core::{Error, FieldName};
use parceldb_engine::{Store, StoreConfig};
use tempfile::TempDir;

fn open_store(temp_dir: &TempDir) -> Store {
    Store::open(StoreConfig::new(temp_dir.path())).expect("failed to open store")
}

fn with_staff(store: &mut Store) {
    store
        .add_customer("019245", "Rick", "Sanchez", "555-867-5309", "601 University Drive")
        .unwrap();
    store
        .add_employee("000114", "Summer", "Smith", "000114444", "3456.23", "1234567890")
        .unwrap();
}

// === Package orders ===

#[test]
fn test_add_box_then_find_ignoring_case() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    let key = store
        .add_package("AB123", "Box", "Fragile", "First-Class", "30", "2500")
        .unwrap();
    assert_eq!(key.as_str(), "AB123");

    let found = store.find_package("ab123").expect("lookup should fold case");
    // Original casing is preserved for display.
    assert_eq!(found.tracking().to_string(), "AB123");
    assert_eq!(found.specification(), Specification::Fragile);
    assert_eq!(
        *found.detail(),
        PackageDetail::Box { largest_dimension: 30, volume: 2500 }
    );
}

#[test]
fn test_duplicate_tracking_rejected_even_with_other_casing() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    store
        .add_package("AB123", "Box", "Fragile", "First-Class", "30", "2500")
        .unwrap();
    let err = store
        .add_package("ab123", "Drum", "Books", "Retail", "Plastic", "40")
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { .. }));

    assert_eq!(store.packages().len(), 1);
    assert_eq!(store.packages()[0].detail().kind(), PackageKind::Box);
}

#[test]
fn test_malformed_tracking_number_inserts_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    let err = store
        .add_package("AB12", "Box", "Fragile", "First-Class", "30", "2500")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidFormat { field: FieldName::TrackingNumber, .. }
    ));
    assert!(store.packages().is_empty());
}

#[test]
fn test_unknown_package_kind_inserts_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    let err = store
        .add_package("AB123", "Tube", "Fragile", "First-Class", "30", "2500")
        .unwrap_err();
    assert!(matches!(err, Error::UnknownVariant { .. }));
    assert!(store.packages().is_empty());
}

#[test]
fn test_bad_detail_field_inserts_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    // Volume over 999999.
    let err = store
        .add_package("AB123", "Box", "Fragile", "First-Class", "30", "1000000")
        .unwrap_err();
    assert!(matches!(err, Error::OutOfRange { field: FieldName::Volume, .. }));
    assert!(store.packages().is_empty());

    // Negative crate weight.
    let err = store
        .add_package("AB123", "Crate", "N/A", "Ground", "-1.5", "dishes")
        .unwrap_err();
    assert!(matches!(err, Error::OutOfRange { field: FieldName::LoadWeight, .. }));
    assert!(store.packages().is_empty());
}

#[test]
fn test_packages_listing_stays_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    store.add_package("ZZ999", "Envelope", "Books", "Retail", "10", "12").unwrap();
    store.add_package("aa111", "Drum", "N/A", "Ground", "Fiber", "55").unwrap();
    store.add_package("MM555", "Box", "Catalogs", "Priority", "20", "900").unwrap();

    let order: Vec<&str> = store.packages().iter().map(|p| p.tracking().as_str()).collect();
    assert_eq!(order, vec!["aa111", "MM555", "ZZ999"]);

    store.remove_package("mm555").unwrap();
    let order: Vec<&str> = store.packages().iter().map(|p| p.tracking().as_str()).collect();
    assert_eq!(order, vec!["aa111", "ZZ999"]);
}

#[test]
fn test_remove_missing_package() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    let err = store.remove_package("AB123").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
    // A key that cannot even be a tracking number reports not-found too.
    let err = store.remove_package("not-a-key").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn test_find_with_malformed_key_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    store.add_package("AB123", "Box", "Fragile", "First-Class", "30", "2500").unwrap();

    assert!(store.find_package("toolong99").is_none());
    assert!(store.find_user("12").is_none());
}

// === Users ===

#[test]
fn test_add_users_and_listing_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    let ids: Vec<String> = store.users().iter().map(|u| u.id().to_string()).collect();
    assert_eq!(ids, vec!["000114", "019245"]);
}

#[test]
fn test_duplicate_user_id_rejected_across_roles() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    store
        .add_customer("222222", "Beth", "Smith", "555-1111", "territory of the Cromulons")
        .unwrap();
    let err = store
        .add_employee("222222", "Jerry", "Smith", "111223333", "1.0", "99998888777")
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { .. }));
    assert_eq!(store.users().len(), 1);
    assert!(store.users()[0].role().is_customer());
}

#[test]
fn test_employee_salary_update_rejects_negative_and_keeps_old_value() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    let err = store.update_user("000114", "Salary", "-5").unwrap_err();
    assert!(matches!(err, Error::OutOfRange { field: FieldName::Salary, .. }));
    match store.find_user("000114").unwrap().role() {
        Role::Employee { salary, .. } => assert_eq!(*salary, 3456.23),
        other => panic!("expected employee, got {:?}", other),
    }

    store.update_user("000114", "Salary", "5000").unwrap();
    match store.find_user("000114").unwrap().role() {
        Role::Employee { salary, .. } => assert_eq!(*salary, 5000.0),
        other => panic!("expected employee, got {:?}", other),
    }
}

#[test]
fn test_update_wrong_role_field_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    // Salary on a customer
    let err = store.update_user("019245", "Salary", "100").unwrap_err();
    assert!(matches!(err, Error::UnsupportedField { .. }));
    // Address on an employee
    let err = store.update_user("000114", "Address", "anywhere").unwrap_err();
    assert!(matches!(err, Error::UnsupportedField { .. }));
    // Identity key is never updatable
    let err = store.update_user("019245", "Id", "999999").unwrap_err();
    assert!(matches!(err, Error::UnsupportedField { .. }));
}

#[test]
fn test_update_missing_user_is_key_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);

    let err = store.update_user("123456", "Phone", "555-0000").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn test_remove_user() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    let removed = store.remove_user("019245").unwrap();
    assert_eq!(removed.full_name(), "Rick Sanchez");
    assert_eq!(store.users().len(), 1);
    assert!(store.find_user("019245").is_none());
}

// === Transactions ===

#[test]
fn test_record_transaction_appends() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    store
        .record_transaction("019245", "000114", "AB123", "12/01/24", "12/24/24", "3456.23")
        .unwrap();

    let transactions = store.transactions();
    assert_eq!(transactions.len(), 1);
    let txn = &transactions[0];
    assert_eq!(txn.customer().to_string(), "019245");
    assert_eq!(txn.employee().to_string(), "000114");
    assert_eq!(txn.ship_date(), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    assert_eq!(txn.deliver_date(), NaiveDate::from_ymd_opt(2024, 12, 24).unwrap());
}

#[test]
fn test_transaction_bad_deliver_date_appends_nothing_then_succeeds_when_fixed() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    let err = store
        .record_transaction("019245", "000114", "AB123", "12/01/24", "13/40/23", "10.0")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DateParse { field: FieldName::DeliverDate, .. }
    ));
    assert!(store.transactions().is_empty());

    store
        .record_transaction("019245", "000114", "AB123", "12/01/24", "12/24/24", "10.0")
        .unwrap();
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn test_transaction_role_checks_both_directions() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    // Employee id given as the customer
    let err = store
        .record_transaction("000114", "000114", "AB123", "12/01/24", "12/24/24", "10.0")
        .unwrap_err();
    match err {
        Error::RoleMismatch { key, expected } => {
            assert_eq!(key, "000114");
            assert_eq!(expected, "a customer");
        }
        other => panic!("expected RoleMismatch, got {:?}", other),
    }

    // Customer id given as the employee
    let err = store
        .record_transaction("019245", "019245", "AB123", "12/01/24", "12/24/24", "10.0")
        .unwrap_err();
    match err {
        Error::RoleMismatch { key, expected } => {
            assert_eq!(key, "019245");
            assert_eq!(expected, "an employee");
        }
        other => panic!("expected RoleMismatch, got {:?}", other),
    }
    assert!(store.transactions().is_empty());
}

#[test]
fn test_transaction_unknown_participant() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    let err = store
        .record_transaction("999999", "000114", "AB123", "12/01/24", "12/24/24", "10.0")
        .unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
    assert!(store.transactions().is_empty());
}

#[test]
fn test_transaction_negative_cost_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    let err = store
        .record_transaction("019245", "000114", "AB123", "12/01/24", "12/24/24", "-10.0")
        .unwrap_err();
    assert!(matches!(err, Error::OutOfRange { field: FieldName::Cost, .. }));
    assert!(store.transactions().is_empty());
}

#[test]
fn test_transaction_tracking_need_not_exist_but_must_be_well_formed() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    // No package AB123 exists; the key only has to be well-formed.
    store
        .record_transaction("019245", "000114", "AB123", "12/01/24", "12/24/24", "10.0")
        .unwrap();

    let err = store
        .record_transaction("019245", "000114", "AB12345", "12/01/24", "12/24/24", "10.0")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidFormat { field: FieldName::TrackingNumber, .. }
    ));
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn test_transactions_keep_insertion_order_and_allow_repeats() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    with_staff(&mut store);

    for _ in 0..2 {
        store
            .record_transaction("019245", "000114", "AB123", "12/01/24", "12/24/24", "10.0")
            .unwrap();
    }
    store
        .record_transaction("019245", "000114", "ZZ999", "01/05/25", "01/09/25", "20.0")
        .unwrap();

    let tracking: Vec<&str> = store
        .transactions()
        .iter()
        .map(|t| t.tracking().as_str())
        .collect();
    assert_eq!(tracking, vec!["AB123", "AB123", "ZZ999"]);
}
