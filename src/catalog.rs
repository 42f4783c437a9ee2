//! Catalog: ordered key → string table backing one `(locale, domain)` pair.
//!
//! Catalogs are flat JSON objects. Key order is kept as found on disk
//! (serde_json `preserve_order`), and writes are pretty-printed with a
//! trailing newline so that saving an unchanged catalog is byte-stable.

use crate::error::{I18nError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Ordered translation table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Map<String, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON text.
    ///
    /// The document must be an object whose values are all strings.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| I18nError::TranslationInvalid(e.to_string()))?;

        let entries = match value {
            Value::Object(entries) => entries,
            other => {
                return Err(I18nError::TranslationInvalid(format!(
                    "expected a JSON object, found {}",
                    json_type(&other)
                )))
            }
        };

        if let Some((key, value)) = entries.iter().find(|(_, v)| !v.is_string()) {
            return Err(I18nError::TranslationInvalid(format!(
                "value of '{}' must be a string, found {}",
                key,
                json_type(value)
            )));
        }

        Ok(Self { entries })
    }

    /// Serialize the catalog as pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(self)
            .map_err(|e| I18nError::TranslationInvalid(e.to_string()))?;
        content.push('\n');
        Ok(content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite a value. Existing keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Value::String(value.into()));
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|k, _| k != key);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.as_str(), v)))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a catalog file.
///
/// # Returns
/// * `Ok(Some(catalog))` if the file exists and parses
/// * `Ok(None)` if the file does not exist
/// * `Err(TranslationInvalid)` if it exists but is malformed
/// * `Err(Io)` if it exists but cannot be read
pub fn read_catalog(path: &Path) -> Result<Option<Catalog>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(I18nError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let catalog = Catalog::from_json(&content).map_err(|e| match e {
        I18nError::TranslationInvalid(details) => {
            I18nError::TranslationInvalid(format!("{}: {}", path.display(), details))
        }
        other => other,
    })?;

    debug!("Loaded {} translations from {}", catalog.len(), path.display());
    Ok(Some(catalog))
}

/// Write a catalog file, creating parent folders as needed.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let io_error = |source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, catalog.to_json()?).map_err(io_error)
}
