//! FFI use-case API for the UI shell.
//!
//! # Responsibility
//! - Expose stable, use-case-level catalog functions to Dart via FRB.
//! - Keep error semantics simple for UI integration: envelopes, not throws.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Mutation envelopes report affected-element counts so the UI can
//!   re-render from a fresh list after every change.

use folio_core::db::open_db;
use folio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_tag_input as parse_tag_input_inner, ping as ping_inner, AdminSession, CatalogStore,
    CatalogVariant, NoteColor, ProjectIcon, ProjectRecord, SpecialNote, SqliteSnapshotStore,
};
use log::warn;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const CATALOG_DB_FILE_NAME: &str = "folio_catalog.sqlite3";
static CATALOG_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static ADMIN_SESSION: Mutex<AdminSession> = Mutex::new(AdminSession::new());

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Flips the admin visibility flag from the UI keyboard chord handler.
///
/// This gates visibility of add/edit/delete controls only; it is not an
/// authentication mechanism.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Returns the new flag state.
#[flutter_rust_bridge::frb(sync)]
pub fn admin_toggle() -> bool {
    match ADMIN_SESSION.lock() {
        Ok(mut session) => session.toggle(),
        Err(poisoned) => poisoned.into_inner().toggle(),
    }
}

/// Returns the current admin visibility flag.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn admin_status() -> bool {
    match ADMIN_SESSION.lock() {
        Ok(session) => session.is_admin(),
        Err(poisoned) => poisoned.into_inner().is_admin(),
    }
}

/// Splits comma-separated tag form input into clean tag values.
///
/// # FFI contract
/// - Sync call, pure, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn split_tag_input(text: String) -> Vec<String> {
    parse_tag_input_inner(&text)
}

/// Project card crossing the FFI boundary as plain strings.
///
/// `special_note` is flattened into `note_*` fields; absent optionals stay
/// `None` on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardDto {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub icon_name: String,
    pub icon_bg_color: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: Option<bool>,
    pub note_icon: Option<String>,
    pub note_text: Option<String>,
    pub note_color: Option<String>,
}

/// List response envelope for catalog rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListResponse {
    /// Catalog entries in display order (empty on failure).
    pub items: Vec<ProjectCardDto>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Number of elements the operation affected.
    pub affected: u32,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl CatalogActionResponse {
    fn success(message: impl Into<String>, affected: u32) -> Self {
        Self {
            ok: true,
            affected,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            affected: 0,
            message: message.into(),
        }
    }
}

/// Lists the catalog for one variant in display order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures return an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_list(variant: String) -> CatalogListResponse {
    match with_catalog(&variant, |catalog| {
        catalog.projects().iter().map(record_to_card).collect()
    }) {
        Ok(items) => CatalogListResponse {
            items,
            message: String::new(),
        },
        Err(err) => {
            warn!("event=ffi_catalog_list module=ffi status=error error={err}");
            CatalogListResponse {
                items: Vec::new(),
                message: format!("catalog_list failed: {err}"),
            }
        }
    }
}

/// Appends one project to the catalog.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; rejects invalid records and duplicate titles via the
///   envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_add(variant: String, card: ProjectCardDto) -> CatalogActionResponse {
    let record = match card_to_record(card) {
        Ok(record) => record,
        Err(err) => return CatalogActionResponse::failure(format!("catalog_add failed: {err}")),
    };

    match with_catalog(&variant, move |catalog| catalog.add(record)) {
        Ok(Ok(())) => CatalogActionResponse::success("Project added.", 1),
        Ok(Err(err)) => CatalogActionResponse::failure(format!("catalog_add failed: {err}")),
        Err(err) => CatalogActionResponse::failure(format!("catalog_add failed: {err}")),
    }
}

/// Replaces every project titled `key` with the submitted card.
///
/// Zero matches is reported as success with `affected = 0`; the UI treats
/// it as a no-op.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_update(variant: String, key: String, card: ProjectCardDto) -> CatalogActionResponse {
    let record = match card_to_record(card) {
        Ok(record) => record,
        Err(err) => return CatalogActionResponse::failure(format!("catalog_update failed: {err}")),
    };

    match with_catalog(&variant, move |catalog| catalog.update(&key, record)) {
        Ok(Ok(replaced)) => {
            CatalogActionResponse::success("Project updated.", clamp_count(replaced))
        }
        Ok(Err(err)) => CatalogActionResponse::failure(format!("catalog_update failed: {err}")),
        Err(err) => CatalogActionResponse::failure(format!("catalog_update failed: {err}")),
    }
}

/// Removes every project titled `key`.
///
/// The UI must obtain explicit user confirmation before calling this; the
/// core does not re-prompt.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_remove(variant: String, key: String) -> CatalogActionResponse {
    match with_catalog(&variant, move |catalog| catalog.remove(&key)) {
        Ok(removed) => CatalogActionResponse::success("Project removed.", clamp_count(removed)),
        Err(err) => CatalogActionResponse::failure(format!("catalog_remove failed: {err}")),
    }
}

fn with_catalog<T>(
    variant: &str,
    f: impl FnOnce(&mut CatalogStore<SqliteSnapshotStore<'_>>) -> T,
) -> Result<T, String> {
    let variant =
        CatalogVariant::parse(variant).ok_or_else(|| format!("unknown variant `{variant}`"))?;
    let db_path = resolve_db_path();
    let conn: Connection =
        open_db(&db_path).map_err(|err| format!("catalog DB open failed: {err}"))?;
    let mut catalog = CatalogStore::load(SqliteSnapshotStore::new(&conn), variant);
    Ok(f(&mut catalog))
}

fn resolve_db_path() -> PathBuf {
    CATALOG_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("FOLIO_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(CATALOG_DB_FILE_NAME)
        })
        .clone()
}

fn record_to_card(record: &ProjectRecord) -> ProjectCardDto {
    ProjectCardDto {
        title: record.title.clone(),
        subtitle: record.subtitle.clone(),
        description: record.description.clone(),
        tags: record.tags.clone(),
        icon_name: record.icon_name.as_str().to_string(),
        icon_bg_color: record.icon_bg_color.clone(),
        github_url: record.github_url.clone(),
        live_url: record.live_url.clone(),
        featured: record.featured,
        note_icon: record
            .special_note
            .as_ref()
            .map(|note| note.icon_name.as_str().to_string()),
        note_text: record.special_note.as_ref().map(|note| note.text.clone()),
        note_color: record
            .special_note
            .as_ref()
            .map(|note| note.color.as_str().to_string()),
    }
}

fn card_to_record(card: ProjectCardDto) -> Result<ProjectRecord, String> {
    // Unknown card icons fall back to the star glyph, matching the UI
    // shell's render-time fallback.
    let icon_name = ProjectIcon::parse(&card.icon_name).unwrap_or(ProjectIcon::Star);

    let special_note = match card.note_text {
        Some(text) => {
            let color_value = card
                .note_color
                .ok_or_else(|| "special note requires a color".to_string())?;
            let color = NoteColor::parse(&color_value)
                .ok_or_else(|| format!("unknown note color `{color_value}`"))?;
            let note_icon = card
                .note_icon
                .as_deref()
                .and_then(ProjectIcon::parse)
                .unwrap_or(ProjectIcon::Warning);
            Some(SpecialNote {
                icon_name: note_icon,
                text,
                color,
            })
        }
        None => None,
    };

    Ok(ProjectRecord {
        title: card.title,
        subtitle: card.subtitle,
        description: card.description,
        tags: card.tags,
        icon_name,
        icon_bg_color: card.icon_bg_color,
        github_url: normalize_optional_url(card.github_url),
        live_url: normalize_optional_url(card.live_url),
        featured: card.featured,
        special_note,
    })
}

// The admin form submits unset URL inputs as empty strings.
fn normalize_optional_url(value: Option<String>) -> Option<String> {
    value.filter(|url| !url.trim().is_empty())
}

fn clamp_count(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        admin_status, admin_toggle, catalog_add, catalog_list, catalog_remove, catalog_update,
        core_version, init_logging, ping, split_tag_input, ProjectCardDto,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        format!("{prefix}-{}-{nanos}", std::process::id())
    }

    fn make_card(title: &str) -> ProjectCardDto {
        ProjectCardDto {
            title: title.to_string(),
            subtitle: "Smoke subtitle".to_string(),
            description: "Smoke description".to_string(),
            tags: vec!["smoke".to_string()],
            icon_name: "StarIcon".to_string(),
            icon_bg_color: "bg-gray-500".to_string(),
            github_url: None,
            live_url: None,
            featured: None,
            note_icon: None,
            note_text: None,
            note_color: None,
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn admin_flag_toggles_round_trip() {
        let first = admin_toggle();
        assert_eq!(admin_status(), first);
        let second = admin_toggle();
        assert_eq!(second, !first);
        assert_eq!(admin_status(), second);
    }

    #[test]
    fn split_tag_input_drops_blank_entries() {
        assert_eq!(
            split_tag_input("a, b , ,c".to_string()),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let response = catalog_list("neon".to_string());
        assert!(response.items.is_empty());
        assert!(response.message.contains("unknown variant"));
    }

    #[test]
    fn catalog_mutation_round_trip() {
        let title = unique_token("ffi-card");
        let card = make_card(&title);

        let added = catalog_add("classic".to_string(), card.clone());
        assert!(added.ok, "{}", added.message);

        let listed = catalog_list("classic".to_string());
        assert!(listed.items.iter().any(|item| item.title == title));

        let mut updated_card = card;
        updated_card.subtitle = "Updated subtitle".to_string();
        let updated = catalog_update("classic".to_string(), title.clone(), updated_card);
        assert!(updated.ok, "{}", updated.message);
        assert_eq!(updated.affected, 1);

        let removed = catalog_remove("classic".to_string(), title.clone());
        assert!(removed.ok, "{}", removed.message);
        assert_eq!(removed.affected, 1);

        let final_list = catalog_list("classic".to_string());
        assert!(final_list.items.iter().all(|item| item.title != title));
    }
}
