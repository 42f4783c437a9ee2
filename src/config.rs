use crate::detection::DetectionMethod;
use crate::error::{I18nError, Result};
use crate::locale::LocaleIdentifier;
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_DOMAIN: &str = "messages";
pub const DEFAULT_FOLDER: &str = "locale";
pub const DEFAULT_EXTENSION: &str = "json";

/// Internationalization settings for one request/session scope.
#[derive(Debug, Clone)]
pub struct Settings {
    // Detection
    pub detection_method: DetectionMethod,
    pub default_locale: LocaleIdentifier,
    preferred_locale: Option<LocaleIdentifier>,

    // Catalog location
    pub domain: String,
    pub folder: PathBuf,
    pub extension: String,
}

impl Settings {
    pub fn new(detection_method: DetectionMethod, default_locale: LocaleIdentifier) -> Self {
        Self {
            detection_method,
            default_locale,
            preferred_locale: None,
            domain: DEFAULT_DOMAIN.to_string(),
            folder: PathBuf::from(DEFAULT_FOLDER),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Set the default translation domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the folder holding one sub-folder per locale
    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Set the catalog file extension (without the dot)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Build settings from configuration attributes.
    ///
    /// Recognized attributes: `method` and `locale` (required), `domain`,
    /// `folder` and `extension` (optional).
    pub fn from_attributes(attributes: &HashMap<String, String>) -> Result<Self> {
        let required = |name: &str| {
            attributes
                .get(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    I18nError::Configuration(format!("Attribute '{}' is mandatory", name))
                })
        };

        let detection_method: DetectionMethod = required("method")?.parse()?;
        let default_locale = LocaleIdentifier::parse(required("locale")?)?;

        let mut settings = Self::new(detection_method, default_locale);
        if let Some(domain) = attributes.get("domain").filter(|v| !v.is_empty()) {
            settings = settings.with_domain(domain.as_str());
        }
        if let Some(folder) = attributes.get("folder").filter(|v| !v.is_empty()) {
            settings = settings.with_folder(folder.as_str());
        }
        if let Some(extension) = attributes.get("extension").filter(|v| !v.is_empty()) {
            settings = settings.with_extension(extension.trim_start_matches('.'));
        }
        Ok(settings)
    }

    /// Build settings from `I18N_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let attributes: HashMap<String, String> = [
            ("method", "I18N_METHOD"),
            ("locale", "I18N_LOCALE"),
            ("domain", "I18N_DOMAIN"),
            ("folder", "I18N_FOLDER"),
            ("extension", "I18N_EXTENSION"),
        ]
        .into_iter()
        .filter_map(|(name, var)| std::env::var(var).ok().map(|v| (name.to_string(), v)))
        .collect();

        Self::from_attributes(&attributes)
    }

    /// Locale chosen by resolution, or the default locale before resolution ran.
    pub fn preferred_locale(&self) -> &LocaleIdentifier {
        self.preferred_locale.as_ref().unwrap_or(&self.default_locale)
    }

    /// Record the resolved locale. May only be called once.
    pub fn set_preferred_locale(&mut self, locale: LocaleIdentifier) -> Result<()> {
        if let Some(existing) = &self.preferred_locale {
            return Err(I18nError::Configuration(format!(
                "Preferred locale already set to '{}'",
                existing
            )));
        }
        self.preferred_locale = Some(locale);
        Ok(())
    }

    /// Folder holding all catalogs of a locale.
    pub fn locale_folder(&self, locale: &LocaleIdentifier) -> PathBuf {
        self.folder.join(locale.tag())
    }

    /// Path of the catalog for a `(locale, domain)` pair.
    pub fn catalog_path(&self, locale: &LocaleIdentifier, domain: &str) -> PathBuf {
        self.locale_folder(locale)
            .join(format!("{}.{}", domain, self.extension))
    }
}
