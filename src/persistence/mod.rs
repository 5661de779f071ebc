//! Save/load persistence
//!
//! Features:
//! - Whole-file JSON documents, read once and written once per session
//! - Atomic writes (tmp -> rename)
//! - Malformed data is skipped, never fatal

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::accounts::{AccountRegistry, Score};
use crate::error::Result;

/// Serialize `value` as pretty JSON, writing to a temporary file first
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let mut tmp = PathBuf::from(path);
    tmp.set_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Read a file as JSON. Missing or unreadable files and parse failures
/// yield `None` (logged).
pub fn read_json(path: &Path) -> Option<Value> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No file at {}, starting fresh", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("Could not read {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {e}", path.display());
            None
        }
    }
}

/// Build a registry from a parsed save document, skipping any account or
/// score that does not parse.
pub fn registry_from_value(value: &Value) -> AccountRegistry {
    let mut registry = AccountRegistry::new();

    let Some(accounts) = value.get("accounts").and_then(Value::as_array) else {
        log::warn!("Save data has no account list, starting fresh");
        return registry;
    };

    for entry in accounts {
        let name = match entry.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                log::warn!("Skipping account without a name");
                continue;
            }
        };

        let id = registry.get_or_create(name);
        let scores = entry
            .get("scores")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for raw in scores {
            match serde_json::from_value::<Score>(raw.clone()) {
                Ok(score) => {
                    if let Some(account) = registry.account_mut(id) {
                        account.add_score_at(score.level(), score.value(), score.timestamp_ms());
                    }
                }
                Err(e) => log::warn!("Skipping unreadable score for {name}: {e}"),
            }
        }
    }

    registry
}

/// Load the account registry. Never fails: bad data means an empty registry.
pub fn load_registry(path: &Path) -> AccountRegistry {
    let registry = read_json(path)
        .map(|value| registry_from_value(&value))
        .unwrap_or_default();
    log::info!(
        "Loaded {} accounts ({} scores) from {}",
        registry.len(),
        registry.score_count(),
        path.display()
    );
    registry
}

/// Write the whole registry
pub fn save_registry(registry: &AccountRegistry, path: &Path) -> Result<()> {
    write_json_atomic(path, registry)?;
    log::info!(
        "Saved {} accounts ({} scores) to {}",
        registry.len(),
        registry.score_count(),
        path.display()
    );
    Ok(())
}
