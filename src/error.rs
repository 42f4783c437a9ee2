//! Error taxonomy for locale detection and catalog access.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving a locale or reading/writing catalogs.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Fatal setup problem: missing/invalid setting, no session for
    /// session-based detection, or no catalogs for the default locale.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Neither the preferred nor the default locale has a catalog for the domain.
    #[error("Translation domain not found: {0}")]
    DomainNotFound(String),

    /// A catalog exists but is not a flat JSON object of strings.
    #[error("Translation file is invalid: {0}")]
    TranslationInvalid(String),

    /// A catalog could not be read or written for a reason other than absence.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, I18nError>;
