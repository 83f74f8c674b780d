//! The per-run mod catalog, loaded from `Screenshots.yaml`.
//!
//! ```yaml
//! mods:
//!   coolmod:
//!     text: "Cool Mod"
//!     logo: "./logos/{id}.png"
//! ```
//!
//! Property names and mod keys are case-insensitive. A missing file is an
//! empty catalog; a malformed one is an error.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use modshot_common::config::AppConfig;
use modshot_common::error::{ModshotError, ModshotResult};

use crate::identifier::resolve_identifier;
use crate::options::{ModOptions, StoredOptions};

/// Nesting depth whose mapping keys are case-folded:
/// document, `mods`, and each mod entry.
const FOLDED_DEPTH: usize = 3;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsDocument {
    #[serde(default)]
    mods: BTreeMap<String, StoredOptions>,
}

/// Read-only mapping from lowercase mod identifier to stored options.
#[derive(Debug, Clone, Default)]
pub struct ModCatalog {
    mods: BTreeMap<String, StoredOptions>,
}

impl ModCatalog {
    /// Load the catalog at `path`. A missing file yields an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> ModshotResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No options file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ModshotError::config(path, format!("cannot read: {e}")))?;
        let catalog = Self::parse(&content).map_err(|message| ModshotError::config(path, message))?;

        tracing::info!(
            path = %path.display(),
            mods = catalog.len(),
            "Loaded mod options"
        );
        Ok(catalog)
    }

    /// Parse an options document.
    pub fn parse(yaml: &str) -> Result<Self, String> {
        let value: Value = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        let value = match value {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(_) => fold_keys(value, FOLDED_DEPTH)?,
            other => {
                return Err(format!(
                    "expected a mapping at the top level, found {}",
                    value_kind(&other)
                ))
            }
        };
        let document: OptionsDocument = serde_yaml::from_value(value).map_err(|e| e.to_string())?;
        Ok(Self {
            mods: document.mods,
        })
    }

    /// Stored options for `identifier`, ignoring case.
    pub fn get(&self, identifier: &str) -> Option<&StoredOptions> {
        self.mods.get(&identifier.to_lowercase())
    }

    /// Resolve the options for a screenshot from its file name.
    pub fn options_for(&self, screenshot: impl AsRef<Path>, config: &AppConfig) -> ModOptions {
        match resolve_identifier(screenshot) {
            Some(id) => ModOptions::resolve(self.get(&id), Some(&id), config),
            None => ModOptions::defaults(config),
        }
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }
}

/// Lowercase string keys of nested mappings down to `depth` levels,
/// rejecting keys that collide once folded.
fn fold_keys(value: Value, depth: usize) -> Result<Value, String> {
    let Value::Mapping(mapping) = value else {
        return Ok(value);
    };
    if depth == 0 {
        return Ok(Value::Mapping(mapping));
    }

    let mut folded = Mapping::with_capacity(mapping.len());
    for (key, inner) in mapping {
        let key = match key {
            Value::String(s) => Value::String(s.to_lowercase()),
            Value::Number(n) => Value::String(n.to_string()),
            Value::Bool(b) => Value::String(b.to_string()),
            other => other,
        };
        if folded.contains_key(&key) {
            let name = key.as_str().unwrap_or("<non-string key>");
            return Err(format!("duplicate key '{name}' (keys are case-insensitive)"));
        }
        folded.insert(key, fold_keys(inner, depth - 1)?);
    }
    Ok(Value::Mapping(folded))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
