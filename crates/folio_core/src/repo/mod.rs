//! Persistence layer for catalog snapshots.
//!
//! # Responsibility
//! - Define the key-value snapshot slot contract used by the catalog store.
//! - Isolate SQLite details from catalog orchestration.
//!
//! # Invariants
//! - A slot write always replaces the full payload; there is no delta form.
//! - Slot keys are opaque to this layer; variants own their key mapping.

pub mod snapshot_repo;
