//! Catalog store: the authoritative ordered project collection.
//!
//! # Responsibility
//! - Own the in-memory catalog for one variant and keep its persisted
//!   snapshot in sync after every mutation.
//! - Recover locally from missing or unreadable snapshots via the seed list.
//!
//! # Invariants
//! - Loaded snapshots are accepted verbatim, including duplicate titles;
//!   update/remove then affect every matching element.
//! - Add enforces title uniqueness against the current collection.
//! - Every persisted snapshot is a complete replacement of the previous one.
//! - Persist failures never surface to callers; the in-memory collection
//!   stays authoritative.

use crate::model::project::{ProjectRecord, ProjectValidationError};
use crate::model::seed::seed_catalog;
use crate::model::variant::CatalogVariant;
use crate::repo::snapshot_repo::SnapshotStore;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog mutation errors.
///
/// Persistence failures are deliberately absent: persist is logged-only and
/// never surfaces (the snapshot catches up on the next successful write).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Validation(ProjectValidationError),
    /// The title is already present in the collection.
    DuplicateTitle(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateTitle(title) => {
                write!(f, "project title already exists: `{title}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateTitle(_) => None,
        }
    }
}

impl From<ProjectValidationError> for CatalogError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered project collection bound to one variant's snapshot slot.
pub struct CatalogStore<S: SnapshotStore> {
    store: S,
    variant: CatalogVariant,
    projects: Vec<ProjectRecord>,
}

impl<S: SnapshotStore> CatalogStore<S> {
    /// Hydrates the catalog for `variant` from its snapshot slot.
    ///
    /// # Contract
    /// - A present, parseable snapshot becomes the collection verbatim.
    /// - A missing or unreadable snapshot falls back to the seed list, which
    ///   is immediately persisted so the slot is never left empty.
    /// - Never fails: every recovery path is logged, not surfaced.
    pub fn load(store: S, variant: CatalogVariant) -> Self {
        let slot_key = variant.slot_key();

        if let Some(projects) = read_snapshot(&store, slot_key) {
            info!(
                "event=catalog_load module=service status=ok source=snapshot slot={slot_key} count={}",
                projects.len()
            );
            return Self {
                store,
                variant,
                projects,
            };
        }

        let catalog = Self {
            store,
            variant,
            projects: seed_catalog(),
        };
        info!(
            "event=catalog_load module=service status=ok source=seed slot={slot_key} count={}",
            catalog.projects.len()
        );
        catalog.persist();
        catalog
    }

    /// Returns the collection in display order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Returns the first record matching `title`, if any.
    pub fn get(&self, title: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|record| record.title == title)
    }

    /// Returns the variant this catalog is bound to.
    pub fn variant(&self) -> CatalogVariant {
        self.variant
    }

    /// Appends `record` at the end of the collection and persists.
    ///
    /// # Errors
    /// - `Validation` when the record fails write validation.
    /// - `DuplicateTitle` when the title is already present.
    pub fn add(&mut self, record: ProjectRecord) -> Result<(), CatalogError> {
        record.validate()?;
        if self.title_exists(&record.title) {
            return Err(CatalogError::DuplicateTitle(record.title));
        }

        self.projects.push(record);
        self.persist();
        Ok(())
    }

    /// Replaces every element titled `key` with `record`, preserving
    /// position, and persists. Returns the replaced-element count.
    ///
    /// Zero matches is a no-op, not an error; the snapshot is still
    /// rewritten with the unchanged collection.
    ///
    /// # Errors
    /// - `Validation` when the record fails write validation.
    /// - `DuplicateTitle` when retitling onto another existing entry.
    pub fn update(&mut self, key: &str, record: ProjectRecord) -> Result<usize, CatalogError> {
        record.validate()?;
        if record.title != key && self.title_exists(&record.title) {
            return Err(CatalogError::DuplicateTitle(record.title));
        }

        let mut replaced = 0;
        for slot in self.projects.iter_mut() {
            if slot.title == key {
                *slot = record.clone();
                replaced += 1;
            }
        }

        self.persist();
        Ok(replaced)
    }

    /// Removes every element titled `key` and persists. Returns the removed
    /// count; zero matches is a no-op.
    ///
    /// Obtaining user confirmation beforehand is a UI-level contract, not
    /// enforced here.
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.projects.len();
        self.projects.retain(|record| record.title != key);
        let removed = before - self.projects.len();

        self.persist();
        removed
    }

    fn title_exists(&self, title: &str) -> bool {
        self.projects.iter().any(|record| record.title == title)
    }

    /// Serializes the full collection and overwrites the snapshot slot.
    ///
    /// Failures are logged and not surfaced; the in-memory collection stays
    /// authoritative and the write is not retried.
    fn persist(&self) {
        let slot_key = self.variant.slot_key();
        let payload = match serde_json::to_string(&self.projects) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=catalog_persist module=service status=error slot={slot_key} error_code=snapshot_encode_failed error={err}"
                );
                return;
            }
        };

        if let Err(err) = self.store.write_slot(slot_key, &payload) {
            error!(
                "event=catalog_persist module=service status=error slot={slot_key} error_code=slot_write_failed error={err}"
            );
        }
    }
}

fn read_snapshot<S: SnapshotStore>(store: &S, slot_key: &str) -> Option<Vec<ProjectRecord>> {
    let payload = match store.read_slot(slot_key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(err) => {
            warn!(
                "event=catalog_load module=service status=recovered slot={slot_key} error_code=slot_read_failed error={err}"
            );
            return None;
        }
    };

    match serde_json::from_str::<Vec<ProjectRecord>>(&payload) {
        Ok(projects) => Some(projects),
        Err(err) => {
            warn!(
                "event=catalog_load module=service status=recovered slot={slot_key} error_code=snapshot_parse_failed error={err}"
            );
            None
        }
    }
}
