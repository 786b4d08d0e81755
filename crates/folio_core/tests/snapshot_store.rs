use folio_core::db::open_db_in_memory;
use folio_core::{CatalogVariant, SnapshotStore, SqliteSnapshotStore};

#[test]
fn reading_a_missing_slot_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSnapshotStore::new(&conn);

    assert_eq!(store.read_slot("portfolioProjects_v7").unwrap(), None);
}

#[test]
fn write_then_read_round_trips_the_payload() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSnapshotStore::new(&conn);

    store.write_slot("portfolioProjects_v7", "[]").unwrap();
    assert_eq!(
        store.read_slot("portfolioProjects_v7").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn writing_a_slot_replaces_the_previous_payload() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSnapshotStore::new(&conn);

    store.write_slot("portfolioProjects_v7", "[1]").unwrap();
    store.write_slot("portfolioProjects_v7", "[2]").unwrap();

    assert_eq!(
        store.read_slot("portfolioProjects_v7").unwrap().as_deref(),
        Some("[2]")
    );
}

#[test]
fn slots_are_isolated_by_key() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSnapshotStore::new(&conn);

    store
        .write_slot(CatalogVariant::Classic.slot_key(), "[\"classic\"]")
        .unwrap();

    assert_eq!(store.read_slot(CatalogVariant::Retro.slot_key()).unwrap(), None);
    assert_eq!(store.read_slot(CatalogVariant::Glass.slot_key()).unwrap(), None);
    assert_eq!(
        store
            .read_slot(CatalogVariant::Classic.slot_key())
            .unwrap()
            .as_deref(),
        Some("[\"classic\"]")
    );
}
