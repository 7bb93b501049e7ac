//! Shared application settings (data directory, catalog override).
//!
//! The settings file is always `~/.config/snow-seeker/settings.toml`. Each
//! setting resolves through the same priority chain: CLI flag, then the
//! settings file, then a built-in default.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the shared settings file: `~/.config/snow-seeker/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("snow-seeker").join("settings.toml")
}

/// Default directory for durable app data: `~/.local/share/snow-seeker`.
pub fn default_data_dir() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("snow-seeker")
}

/// Resolve the data directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `storage.data_dir` in `settings.toml`
/// 3. [`default_data_dir`]
pub fn resolve_data_dir(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_data_dir_in(&settings_path(), cli_override)
}

/// Resolve the external catalog file, if any. `None` means "use the bundled
/// dataset".
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.path` in `settings.toml`
pub fn resolve_catalog_path(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    resolve_catalog_path_in(&settings_path(), cli_override)
}

/// Save (or clear) `storage.data_dir`.
pub fn save_data_dir(path: Option<&Path>) -> io::Result<()> {
    save_path_setting(&settings_path(), "storage", "data_dir", path)
}

/// Save (or clear) `catalog.path`.
pub fn save_catalog_path(path: Option<&Path>) -> io::Result<()> {
    save_path_setting(&settings_path(), "catalog", "path", path)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

pub(crate) fn resolve_data_dir_in(settings: &Path, cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_path_setting(settings, "storage", "data_dir") {
        return p;
    }
    default_data_dir()
}

pub(crate) fn resolve_catalog_path_in(
    settings: &Path,
    cli_override: Option<PathBuf>,
) -> Option<PathBuf> {
    cli_override.or_else(|| load_path_setting(settings, "catalog", "path"))
}

/// Read `[section] key` from a settings file, if set and non-empty.
pub(crate) fn load_path_setting(settings: &Path, section: &str, key: &str) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let value = doc.get(section)?.get(key)?.as_str()?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Save (or clear) a path under `[section] key`.
///
/// Uses `toml::Value` for a surgical update so unrelated fields are
/// preserved.
pub(crate) fn save_path_setting(
    settings: &Path,
    section: &str,
    key: &str,
    path: Option<&Path>,
) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [section] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = entry
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{}] is not a table", section)))?;

    match path {
        Some(p) => {
            section_table.insert(
                key.to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            section_table.remove(key);
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}
