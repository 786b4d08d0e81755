//! Domain model for the portfolio catalog.
//!
//! # Responsibility
//! - Define the canonical project record shared by every catalog variant.
//! - Own write-path validation for records entering the catalog.
//!
//! # Invariants
//! - `title` is the identity key for update/remove matching.
//! - Catalog order is insertion order and is display order.

pub mod project;
pub mod seed;
pub mod variant;
