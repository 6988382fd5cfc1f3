//! Black-box tests over the public parceldb API
//!
//! These tests use only what the root crate re-exports, the way an
//! embedding application would: open a store, work a full counter
//! session, close, reopen, and check that everything survived.

use parceldb::{Error, PackageDetail, PackageKind, Role, Store, StoreConfig};
use tempfile::TempDir;

#[test]
fn test_full_counter_session_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path());

    // Phase 1: a day at the counter
    {
        let mut store = Store::open(config.clone()).unwrap();

        // One package of every shape.
        store.add_package("AB123", "Box", "Fragile", "First-Class", "30", "2500").unwrap();
        store.add_package("GFR23", "Envelope", "Books", "Retail", "62", "45").unwrap();
        store.add_package("LM904", "Crate", "N/A", "Ground", "150.5", "dishes").unwrap();
        store.add_package("Q1T77", "Drum", "Do-not-Bend", "Metro", "Fiber", "55").unwrap();

        store
            .add_customer("019245", "Rick", "Sanchez", "555-867-5309", "601 University Drive")
            .unwrap();
        store
            .add_employee("000114", "Summer", "Smith", "000114444", "3456.23", "1234567890")
            .unwrap();

        // Ship one order: record the transaction, remove the order.
        store
            .record_transaction("019245", "000114", "AB123", "12/01/24", "12/24/24", "3456.23")
            .unwrap();
        store.remove_package("AB123").unwrap();

        store.close().unwrap();
    }

    // Phase 2: reopen and verify
    {
        let store = Store::open(config).unwrap();

        let tracking: Vec<&str> = store.packages().iter().map(|p| p.tracking().as_str()).collect();
        assert_eq!(tracking, vec!["GFR23", "LM904", "Q1T77"]);

        // Every shape's fields made the round trip.
        assert_eq!(
            *store.find_package("gfr23").unwrap().detail(),
            PackageDetail::Envelope { height: 62, width: 45 }
        );
        match store.find_package("LM904").unwrap().detail() {
            PackageDetail::Crate { load_weight, content } => {
                assert_eq!(*load_weight, 150.5);
                assert_eq!(content, "dishes");
            }
            other => panic!("expected crate, got {:?}", other),
        }
        assert_eq!(store.find_package("q1t77").unwrap().detail().kind(), PackageKind::Drum);

        assert_eq!(store.users().len(), 2);
        match store.find_user("019245").unwrap().role() {
            Role::Customer { phone, address } => {
                assert_eq!(phone, "555-867-5309");
                assert_eq!(address, "601 University Drive");
            }
            other => panic!("expected customer, got {:?}", other),
        }

        // The shipped order is gone, but its transaction is history.
        assert!(store.find_package("AB123").is_none());
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].tracking().as_str(), "AB123");
    }
}

#[test]
fn test_rejections_leave_no_trace_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path());

    {
        let mut store = Store::open(config.clone()).unwrap();
        store.add_package("AB123", "Box", "Fragile", "First-Class", "30", "2500").unwrap();

        // A rejected duplicate, a rejected key, a rejected detail.
        assert!(matches!(
            store.add_package("ab123", "Box", "Books", "Retail", "1", "1").unwrap_err(),
            Error::DuplicateKey { .. }
        ));
        assert!(store.add_package("XY", "Box", "Books", "Retail", "1", "1").is_err());
        assert!(store.add_package("XY999", "Envelope", "Books", "Retail", "100", "1").is_err());

        store.close().unwrap();
    }

    let store = Store::open(config).unwrap();
    assert_eq!(store.packages().len(), 1);
    assert_eq!(store.packages()[0].tracking().as_str(), "AB123");
}

#[test]
fn test_tracking_casing_is_stored_not_folded() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path());

    {
        let mut store = Store::open(config.clone()).unwrap();
        store.add_package("aB1c2", "Drum", "N/A", "Ground", "Plastic", "40").unwrap();
        store.close().unwrap();
    }

    let store = Store::open(config).unwrap();
    let found = store.find_package("AB1C2").unwrap();
    assert_eq!(found.tracking().to_string(), "aB1c2");
}

#[test]
fn test_updates_persist_and_rejected_updates_do_not() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path());

    {
        let mut store = Store::open(config.clone()).unwrap();
        store
            .add_employee("000114", "Summer", "Smith", "000114444", "3456.23", "1234567890")
            .unwrap();
        store.update_user("000114", "Last-name", "Palicky").unwrap();
        assert!(matches!(
            store.update_user("000114", "Salary", "-5").unwrap_err(),
            Error::OutOfRange { .. }
        ));
        store.close().unwrap();
    }

    let store = Store::open(config).unwrap();
    let user = store.find_user("000114").unwrap();
    assert_eq!(user.full_name(), "Summer Palicky");
    match user.role() {
        Role::Employee { salary, .. } => assert_eq!(*salary, 3456.23),
        other => panic!("expected employee, got {:?}", other),
    }
}

#[test]
fn test_fresh_directory_is_an_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open(StoreConfig::new(temp_dir.path().join("new"))).unwrap();
    assert!(store.packages().is_empty());
    assert!(store.users().is_empty());
    assert!(store.transactions().is_empty());
}
