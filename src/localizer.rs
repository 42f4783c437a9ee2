//! Per-request entry point tying resolution to the reader and writer.

use crate::config::Settings;
use crate::detection::RequestSignals;
use crate::editor::TranslationEditor;
use crate::error::Result;
use crate::resolver::{LocaleResolver, Resolution};
use crate::store::TranslationStore;
use tracing::info;

/// Resolved settings for one client interaction.
///
/// Build one per request: the preferred locale is a request attribute, so
/// localizers are never shared across requests.
#[derive(Debug)]
pub struct Localizer {
    settings: Settings,
    resolution: Resolution,
}

impl Localizer {
    /// Resolve the preferred locale and record it in `settings`.
    pub fn new(mut settings: Settings, signals: &RequestSignals) -> Result<Self> {
        let resolution = LocaleResolver::resolve(&settings, signals)?;
        settings.set_preferred_locale(resolution.locale.clone())?;

        info!(
            "Resolved locale {} using {} detection",
            resolution.locale, settings.detection_method
        );

        Ok(Self {
            settings,
            resolution,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Session write to commit, as `(key, value)`, for session detection.
    pub fn session_update(&self) -> Option<(&'static str, String)> {
        self.resolution.session_update()
    }

    /// Fresh reader for the resolved locale.
    pub fn reader(&self) -> TranslationStore<'_> {
        TranslationStore::new(&self.settings)
    }

    /// Writer for a domain of the resolved locale.
    pub fn writer(&self, domain: Option<&str>) -> Result<TranslationEditor> {
        TranslationEditor::new(&self.settings, domain)
    }
}
