//! Project record model.
//!
//! # Responsibility
//! - Define the catalog entry shape used by every deployed variant.
//! - Keep the serialized form byte-compatible with existing snapshots.
//! - Provide write-path validation and form-input helpers.
//!
//! # Invariants
//! - Wire field names are camelCase (`iconName`, `githubUrl`, ...).
//! - Optional fields are omitted from serialized snapshots when absent.
//! - Loaded snapshots are accepted verbatim; validation applies to writes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static STYLE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^bg-[a-z]+-\d{2,3}$").expect("valid style token regex"));

/// Closed set of icon identifiers renderable by the UI shell.
///
/// Serialized values keep the historical identifier spelling so persisted
/// snapshots stay readable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectIcon {
    #[serde(rename = "MicIcon")]
    Mic,
    #[serde(rename = "SheetIcon")]
    Sheet,
    #[serde(rename = "DeskIcon")]
    Desk,
    #[serde(rename = "StarIcon")]
    Star,
    #[serde(rename = "ClockIcon")]
    Clock,
    #[serde(rename = "HeartIcon")]
    Heart,
    #[serde(rename = "WarningIcon")]
    Warning,
}

impl ProjectIcon {
    /// Stable wire identifier for this icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mic => "MicIcon",
            Self::Sheet => "SheetIcon",
            Self::Desk => "DeskIcon",
            Self::Star => "StarIcon",
            Self::Clock => "ClockIcon",
            Self::Heart => "HeartIcon",
            Self::Warning => "WarningIcon",
        }
    }

    /// Parses one wire identifier into an icon.
    ///
    /// Returns `None` for unknown identifiers; callers decide their own
    /// fallback (the UI shell falls back to `Star`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "MicIcon" => Some(Self::Mic),
            "SheetIcon" => Some(Self::Sheet),
            "DeskIcon" => Some(Self::Desk),
            "StarIcon" => Some(Self::Star),
            "ClockIcon" => Some(Self::Clock),
            "HeartIcon" => Some(Self::Heart),
            "WarningIcon" => Some(Self::Warning),
            _ => None,
        }
    }
}

/// Accent color for a special note banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Red,
    Indigo,
    Yellow,
}

impl NoteColor {
    /// Stable wire value for this color.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Indigo => "indigo",
            Self::Yellow => "yellow",
        }
    }

    /// Parses one wire value into a note color.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "red" => Some(Self::Red),
            "indigo" => Some(Self::Indigo),
            "yellow" => Some(Self::Yellow),
            _ => None,
        }
    }
}

/// Highlighted annotation rendered below a project description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialNote {
    pub icon_name: ProjectIcon,
    pub text: String,
    pub color: NoteColor,
}

/// One catalog entry.
///
/// `title` doubles as the display name and the identity key used by
/// update/remove matching. Optional fields are rendering hints, not data
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Ordered display tags.
    pub tags: Vec<String>,
    pub icon_name: ProjectIcon,
    /// Utility-class style token, e.g. `bg-violet-600`.
    pub icon_bg_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Enlarged card rendering when set. Not a data invariant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_note: Option<SpecialNote>,
}

impl ProjectRecord {
    /// Creates a record with required fields and no optional extras.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        icon_name: ProjectIcon,
        icon_bg_color: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            tags: Vec::new(),
            icon_name,
            icon_bg_color: icon_bg_color.into(),
            github_url: None,
            live_url: None,
            featured: None,
            special_note: None,
        }
    }

    /// Validates this record for catalog writes.
    ///
    /// # Contract
    /// - Applies to add/update paths only; snapshot loads stay verbatim.
    ///
    /// # Errors
    /// - Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::BlankTitle);
        }
        if self.subtitle.trim().is_empty() {
            return Err(ProjectValidationError::BlankSubtitle);
        }
        if self.description.trim().is_empty() {
            return Err(ProjectValidationError::BlankDescription);
        }
        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(ProjectValidationError::BlankTag);
        }
        if !STYLE_TOKEN_RE.is_match(&self.icon_bg_color) {
            return Err(ProjectValidationError::InvalidStyleToken(
                self.icon_bg_color.clone(),
            ));
        }
        validate_url("githubUrl", self.github_url.as_deref())?;
        validate_url("liveUrl", self.live_url.as_deref())?;
        if let Some(note) = &self.special_note {
            if note.text.trim().is_empty() {
                return Err(ProjectValidationError::BlankNoteText);
            }
        }
        Ok(())
    }
}

fn validate_url(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ProjectValidationError> {
    let Some(url) = value else {
        return Ok(());
    };
    if url.starts_with("https://") || url.starts_with("http://") {
        return Ok(());
    }
    Err(ProjectValidationError::InvalidUrl {
        field,
        value: url.to_string(),
    })
}

/// Record validation errors for catalog write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    BlankTitle,
    BlankSubtitle,
    BlankDescription,
    BlankTag,
    InvalidStyleToken(String),
    InvalidUrl { field: &'static str, value: String },
    BlankNoteText,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "project title cannot be blank"),
            Self::BlankSubtitle => write!(f, "project subtitle cannot be blank"),
            Self::BlankDescription => write!(f, "project description cannot be blank"),
            Self::BlankTag => write!(f, "project tags cannot contain blank entries"),
            Self::InvalidStyleToken(value) => {
                write!(f, "invalid icon background token `{value}`")
            }
            Self::InvalidUrl { field, value } => {
                write!(f, "invalid {field} value `{value}`: expected http(s) URL")
            }
            Self::BlankNoteText => write!(f, "special note text cannot be blank"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Splits comma-separated form input into trimmed, non-blank tags.
///
/// Matches the admin form contract: `"a, b , ,c"` becomes `["a", "b", "c"]`.
pub fn parse_tag_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
