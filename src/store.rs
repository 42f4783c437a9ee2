//! Translation reader with per-domain caching and default-locale fallback.

use crate::catalog::{read_catalog, Catalog};
use crate::config::Settings;
use crate::error::{I18nError, Result};
use std::collections::HashMap;
use tracing::{debug, info};

/// Reads translations for the preferred locale of a `Settings`.
///
/// Catalogs are loaded on first use and cached per domain for the lifetime
/// of the store. A store is meant to live for one request.
pub struct TranslationStore<'a> {
    settings: &'a Settings,
    catalogs: HashMap<String, Catalog>,
}

impl<'a> TranslationStore<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            catalogs: HashMap::new(),
        }
    }

    /// Get a single translation.
    ///
    /// # Arguments
    /// * `key` - Identifier of the translated value
    /// * `domain` - Catalog to look in; the configured domain when `None`
    ///
    /// # Returns
    /// The translated value, or `key` itself when the catalog lacks it.
    ///
    /// # Errors
    /// * `DomainNotFound` if neither locale has a catalog for the domain
    /// * `TranslationInvalid` if the catalog found is malformed
    pub fn get_translation(&mut self, key: &str, domain: Option<&str>) -> Result<String> {
        let catalog = self.catalog(domain)?;
        Ok(catalog.get(key).unwrap_or(key).to_string())
    }

    /// Whether the domain's catalog holds a value for `key`.
    pub fn has_translation(&mut self, key: &str, domain: Option<&str>) -> Result<bool> {
        Ok(self.catalog(domain)?.contains(key))
    }

    /// Full catalog of a domain.
    pub fn translations(&mut self, domain: Option<&str>) -> Result<&Catalog> {
        self.catalog(domain)
    }

    fn catalog(&mut self, domain: Option<&str>) -> Result<&Catalog> {
        let domain = domain.unwrap_or(&self.settings.domain).to_string();
        if !self.catalogs.contains_key(&domain) {
            let catalog = load_with_fallback(self.settings, &domain)?
                .ok_or_else(|| I18nError::DomainNotFound(domain.clone()))?;
            self.catalogs.insert(domain.clone(), catalog);
        }
        Ok(&self.catalogs[&domain])
    }
}

/// Load a domain's catalog from the preferred locale, else the default locale.
///
/// Returns `Ok(None)` when neither file exists.
pub(crate) fn load_with_fallback(settings: &Settings, domain: &str) -> Result<Option<Catalog>> {
    let preferred = settings.preferred_locale();
    if let Some(catalog) = read_catalog(&settings.catalog_path(preferred, domain))? {
        return Ok(Some(catalog));
    }

    let default_locale = &settings.default_locale;
    if preferred.same_catalog(default_locale) {
        return Ok(None);
    }

    let fallback = read_catalog(&settings.catalog_path(default_locale, domain))?;
    if fallback.is_some() {
        info!(
            "No '{}' catalog for {}, falling back to {}",
            domain, preferred, default_locale
        );
    } else {
        debug!("No '{}' catalog for {} or {}", domain, preferred, default_locale);
    }
    Ok(fallback)
}
