//! Locale detection and JSON-backed translation catalogs.
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_catalog::{Localizer, RequestSignals, Settings};
//!
//! let settings = Settings::from_env()?;
//! let signals = RequestSignals::new().with_header("Accept-Language", "fr-FR,fr;q=0.9");
//!
//! let localizer = Localizer::new(settings, &signals)?;
//! let greeting = localizer.reader().get_translation("hello", None)?;
//! ```

pub mod catalog;
pub mod config;
pub mod detection;
pub mod editor;
pub mod error;
pub mod locale;
pub mod localizer;
pub mod resolver;
pub mod store;

pub use catalog::Catalog;
pub use config::Settings;
pub use detection::{DetectionMethod, RequestSignals};
pub use editor::TranslationEditor;
pub use error::{I18nError, Result};
pub use locale::LocaleIdentifier;
pub use localizer::Localizer;
pub use resolver::{LocaleResolver, Resolution};
pub use store::TranslationStore;
