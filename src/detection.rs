//! Locale detection strategies.
//!
//! Each strategy looks at one signal source and returns a raw locale
//! candidate, or `None` when the signal is absent. Absence is never an error;
//! the resolver falls back to the default locale.

use crate::error::{I18nError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Name of the request/session parameter carrying a locale.
pub const PARAMETER_NAME: &str = "locale";

/// Header scanned by header-based detection.
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";

static LANGUAGE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// How the user's locale preference is discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// `Accept-Language` request header
    Header,
    /// `locale` request parameter
    Request,
    /// `locale` session value, overridable by the request parameter
    Session,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Header => "header",
            DetectionMethod::Request => "request",
            DetectionMethod::Session => "session",
        }
    }
}

impl FromStr for DetectionMethod {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "header" => Ok(DetectionMethod::Header),
            "request" => Ok(DetectionMethod::Request),
            "session" => Ok(DetectionMethod::Session),
            other => Err(I18nError::Configuration(format!(
                "Unknown locale detection method: '{}' (expected header, request or session)",
                other
            ))),
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signals extracted from one client interaction.
///
/// `session` is `None` when no session scope is active.
#[derive(Debug, Clone, Default)]
pub struct RequestSignals {
    pub parameters: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub session: Option<HashMap<String, String>>,
}

impl RequestSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Mark a session as active and store a value in it.
    pub fn with_session_value(mut self, name: &str, value: &str) -> Self {
        self.session
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Mark a session as active without storing anything in it.
    pub fn with_empty_session(mut self) -> Self {
        self.session.get_or_insert_with(HashMap::new);
        self
    }
}

/// Run the strategy matching `method` against the signals.
pub fn detect(method: DetectionMethod, signals: &RequestSignals) -> Result<Option<String>> {
    match method {
        DetectionMethod::Header => Ok(detect_by_headers(&signals.headers)),
        DetectionMethod::Request => Ok(detect_by_request_parameters(&signals.parameters)),
        DetectionMethod::Session => {
            let session = signals.session.as_ref().ok_or_else(|| {
                I18nError::Configuration("Session must be already started".to_string())
            })?;
            Ok(detect_by_session_parameters(session, &signals.parameters))
        }
    }
}

/// Detect locale from the first `xx-YY` tag of the `Accept-Language` header.
///
/// The exact `Accept-Language` name wins; otherwise header names are matched
/// case-insensitively, taking the smallest matching name so the result does
/// not depend on map order. Quality weights and any alternatives after the
/// first well-formed tag are ignored.
pub fn detect_by_headers(headers: &HashMap<String, String>) -> Option<String> {
    let value = headers.get(ACCEPT_LANGUAGE).or_else(|| {
        headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(ACCEPT_LANGUAGE))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, value)| value)
    })?;

    let regex = LANGUAGE_TAG_REGEX.get_or_init(|| Regex::new(r"([a-z]{2})-([A-Z]{2})").unwrap());
    regex
        .captures(value)
        .map(|caps| format!("{}_{}", &caps[1], &caps[2]))
}

/// Detect locale from the `locale` request parameter, returned verbatim.
pub fn detect_by_request_parameters(parameters: &HashMap<String, String>) -> Option<String> {
    parameters.get(PARAMETER_NAME).cloned()
}

/// Detect locale from the session, letting a request parameter override it.
pub fn detect_by_session_parameters(
    session: &HashMap<String, String>,
    parameters: &HashMap<String, String>,
) -> Option<String> {
    parameters
        .get(PARAMETER_NAME)
        .or_else(|| session.get(PARAMETER_NAME))
        .cloned()
}
