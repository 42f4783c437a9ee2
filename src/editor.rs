//! Translation writer bound to one `(locale, domain)` catalog.

use crate::catalog::{write_catalog, Catalog};
use crate::config::Settings;
use crate::error::Result;
use crate::store::load_with_fallback;
use std::path::{Path, PathBuf};
use tracing::info;

/// Edits the catalog of the preferred locale for one domain.
///
/// Existing entries are loaded with the same fallback as the reader, so a
/// locale without its own catalog starts from the default locale's entries.
/// Saving always targets the preferred locale's file.
#[derive(Debug)]
pub struct TranslationEditor {
    path: PathBuf,
    domain: String,
    catalog: Catalog,
}

impl TranslationEditor {
    /// Open the editor for `domain` (the configured domain when `None`).
    ///
    /// # Errors
    /// * `TranslationInvalid` if an existing catalog is malformed
    pub fn new(settings: &Settings, domain: Option<&str>) -> Result<Self> {
        let domain = domain.unwrap_or(&settings.domain).to_string();
        let catalog = load_with_fallback(settings, &domain)?.unwrap_or_default();

        Ok(Self {
            path: settings.catalog_path(settings.preferred_locale(), &domain),
            domain,
            catalog,
        })
    }

    /// Add a translation or modify an existing one.
    pub fn set_translation(&mut self, key: &str, value: &str) {
        self.catalog.insert(key, value);
    }

    /// Remove a translation. Absent keys are ignored.
    pub fn unset_translation(&mut self, key: &str) {
        self.catalog.remove(key);
    }

    /// Write the whole catalog to the preferred locale's file.
    pub fn save(&self) -> Result<()> {
        write_catalog(&self.path, &self.catalog)?;
        info!(
            "Saved {} translations for domain '{}' to {}",
            self.catalog.len(),
            self.domain,
            self.path.display()
        );
        Ok(())
    }

    pub fn translations(&self) -> &Catalog {
        &self.catalog
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
