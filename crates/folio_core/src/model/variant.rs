//! Deployed catalog variants and their snapshot slot keys.
//!
//! # Invariants
//! - Every variant maps to a distinct slot key; variants never share or
//!   migrate each other's data.
//! - Slot keys are append-only history: bumping a key version abandons the
//!   old slot rather than rewriting it.

use serde::{Deserialize, Serialize};

/// One deployed visual variant of the portfolio.
///
/// The variants render the same catalog shape with different skins; the
/// only core-visible difference is the persistence slot each one owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    /// Plain card layout.
    Classic,
    /// Desktop-window skin.
    Retro,
    /// Gradient glass theme.
    Glass,
}

impl CatalogVariant {
    /// Stable lowercase identifier used by FFI callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Retro => "retro",
            Self::Glass => "glass",
        }
    }

    /// Parses one variant identifier.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "retro" => Some(Self::Retro),
            "glass" => Some(Self::Glass),
            _ => None,
        }
    }

    /// Snapshot slot key owned by this variant.
    pub fn slot_key(self) -> &'static str {
        match self {
            Self::Classic => "portfolioProjects_v7",
            Self::Retro => "portfolioProjects_retro_v3",
            Self::Glass => "portfolioProjects_glass_v2",
        }
    }
}
