//! Locale resolution logic.

use crate::config::Settings;
use crate::detection::{self, DetectionMethod, RequestSignals, PARAMETER_NAME};
use crate::error::{I18nError, Result};
use crate::locale::LocaleIdentifier;
use tracing::{debug, warn};

/// Outcome of a locale resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Locale to translate into
    pub locale: LocaleIdentifier,

    /// Whether the caller must persist `locale` into the session
    pub persist_in_session: bool,
}

impl Resolution {
    /// Session write the caller must commit, as `(key, value)`.
    pub fn session_update(&self) -> Option<(&'static str, String)> {
        self.persist_in_session
            .then(|| (PARAMETER_NAME, self.locale.to_string()))
    }
}

/// Picks the locale to use for one client interaction.
pub struct LocaleResolver;

impl LocaleResolver {
    /// Resolve the preferred locale for a request.
    ///
    /// Resolution order:
    /// 1. Candidate from the configured detection method
    /// 2. Default locale if there is no candidate, if the candidate is
    ///    malformed, or if no catalog folder exists for it
    ///
    /// # Errors
    /// * `Configuration` if session detection runs without an active session
    /// * `Configuration` if the default locale has no catalog folder
    pub fn resolve(settings: &Settings, signals: &RequestSignals) -> Result<Resolution> {
        let candidate = detection::detect(settings.detection_method, signals)?;
        let default_locale = &settings.default_locale;

        let locale = match candidate {
            None => {
                debug!(
                    "No locale detected by {} method, using default {}",
                    settings.detection_method, default_locale
                );
                default_locale.clone()
            }
            Some(raw) => match LocaleIdentifier::parse(&raw) {
                Ok(locale) => locale,
                Err(_) => {
                    warn!("Ignoring malformed locale '{}', using default {}", raw, default_locale);
                    default_locale.clone()
                }
            },
        };

        let locale = if settings.locale_folder(&locale).is_dir() {
            locale
        } else {
            if !settings.locale_folder(default_locale).is_dir() {
                return Err(I18nError::Configuration(format!(
                    "Translations not configured for default locale {} in {}",
                    default_locale,
                    settings.folder.display()
                )));
            }
            if !locale.same_catalog(default_locale) {
                debug!("Locale {} is not supported, using default {}", locale, default_locale);
            }
            default_locale.clone()
        };

        Ok(Resolution {
            locale,
            persist_in_session: settings.detection_method == DetectionMethod::Session,
        })
    }
}
