//! Core domain logic for Folio.
//! This crate is the single source of truth for catalog business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    parse_tag_input, NoteColor, ProjectIcon, ProjectRecord, ProjectValidationError, SpecialNote,
};
pub use model::seed::seed_catalog;
pub use model::variant::CatalogVariant;
pub use repo::snapshot_repo::{SnapshotStore, SqliteSnapshotStore, StoreError, StoreResult};
pub use service::catalog::{CatalogError, CatalogStore};
pub use session::AdminSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
