//! Locale identifier: validated `language_REGION` representation.
//!
//! Identifiers are accepted with either `_` or `-` as separator and are
//! always stored in canonical `_` form, so `en-US` and `en_US` compare equal.
//! An optional charset suffix (`en_US.UTF-8`) is kept for display but is not
//! part of the catalog directory name.

use crate::error::{I18nError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static LOCALE_REGEX: OnceLock<Regex> = OnceLock::new();

fn locale_regex() -> &'static Regex {
    LOCALE_REGEX.get_or_init(|| {
        Regex::new(r"^([a-z]{2})[_-]([A-Z]{2})(?:\.([A-Za-z0-9-]+))?$").unwrap()
    })
}

/// A validated locale such as `en_US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleIdentifier {
    /// ISO 639-1 language code, lowercase (e.g., "en")
    language: String,

    /// ISO 3166-1 region code, uppercase (e.g., "US")
    region: String,

    /// Optional charset suffix (e.g., "UTF-8")
    charset: Option<String>,
}

impl LocaleIdentifier {
    /// Parse a locale string.
    ///
    /// # Returns
    /// * `Ok(LocaleIdentifier)` if the value has the `xx_YY[.charset]` shape
    /// * `Err(I18nError::Configuration)` otherwise
    pub fn parse(value: &str) -> Result<Self> {
        let caps = locale_regex().captures(value).ok_or_else(|| {
            I18nError::Configuration(format!("Invalid locale identifier: '{}'", value))
        })?;

        Ok(Self {
            language: caps[1].to_string(),
            region: caps[2].to_string(),
            charset: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Canonical `language_REGION` tag, used as the catalog directory name.
    pub fn tag(&self) -> String {
        format!("{}_{}", self.language, self.region)
    }

    /// Whether both identifiers point at the same catalog directory.
    pub fn same_catalog(&self, other: &LocaleIdentifier) -> bool {
        self.language == other.language && self.region == other.region
    }
}

impl FromStr for LocaleIdentifier {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LocaleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.charset {
            Some(charset) => write!(f, "{}_{}.{}", self.language, self.region, charset),
            None => write!(f, "{}_{}", self.language, self.region),
        }
    }
}
