//! Integration tests for locale-catalog
//!
//! These tests drive the public API end to end: configuration, locale
//! resolution from each signal source, reading with fallback and writing
//! catalogs back to disk.

use std::collections::HashMap;
use tempfile::TempDir;

use locale_catalog::{
    DetectionMethod, I18nError, LocaleIdentifier, LocaleResolver, Localizer, RequestSignals,
    Settings, TranslationEditor, TranslationStore,
};

// ==================== Test Helpers ====================

/// Create a locale folder with `en_US` (default) and `fr_FR` catalogs
fn create_locale_folder() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    write_catalog(&temp_dir, "en_US", "messages", r#"{"hello": "Hello", "bye": "Goodbye"}"#);
    write_catalog(&temp_dir, "en_US", "house", r#"{"door": "Door", "window": "Window"}"#);
    write_catalog(&temp_dir, "fr_FR", "messages", r#"{"hello": "Bonjour"}"#);

    temp_dir
}

fn write_catalog(temp_dir: &TempDir, locale: &str, domain: &str, content: &str) {
    let folder = temp_dir.path().join(locale);
    std::fs::create_dir_all(&folder).expect("Failed to create locale folder");
    std::fs::write(folder.join(format!("{}.json", domain)), content)
        .expect("Failed to write catalog");
}

fn create_settings(temp_dir: &TempDir, method: &str) -> Settings {
    let attributes: HashMap<String, String> = [
        ("method", method),
        ("locale", "en_US"),
        ("folder", temp_dir.path().to_str().unwrap()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Settings::from_attributes(&attributes).expect("Valid settings")
}

// ==================== Detection + Resolution Tests ====================

#[test]
fn test_header_based_localization() {
    let temp_dir = create_locale_folder();
    let signals = RequestSignals::new().with_header("Accept-Language", "fr-FR,fr;q=0.8,en-US;q=0.5");

    let localizer = Localizer::new(create_settings(&temp_dir, "header"), &signals).unwrap();

    assert_eq!(localizer.settings().preferred_locale().tag(), "fr_FR");
    assert_eq!(localizer.reader().get_translation("hello", None).unwrap(), "Bonjour");
}

#[test]
fn test_request_based_localization() {
    let temp_dir = create_locale_folder();
    let signals = RequestSignals::new().with_parameter("locale", "fr_FR");

    let localizer = Localizer::new(create_settings(&temp_dir, "request"), &signals).unwrap();

    assert_eq!(localizer.reader().get_translation("hello", None).unwrap(), "Bonjour");
    assert!(localizer.session_update().is_none());
}

#[test]
fn test_session_based_localization_persists_choice() {
    let temp_dir = create_locale_folder();

    // First request: explicit switch to French
    let signals = RequestSignals::new()
        .with_empty_session()
        .with_parameter("locale", "fr_FR");
    let localizer = Localizer::new(create_settings(&temp_dir, "session"), &signals).unwrap();
    let (key, value) = localizer.session_update().expect("Session write expected");
    assert_eq!(key, "locale");
    assert_eq!(value, "fr_FR");

    // Second request: no parameter, session carries the choice
    let signals = RequestSignals::new().with_session_value(key, &value);
    let localizer = Localizer::new(create_settings(&temp_dir, "session"), &signals).unwrap();
    assert_eq!(localizer.reader().get_translation("hello", None).unwrap(), "Bonjour");
}

#[test]
fn test_session_override_by_request_parameter() {
    let temp_dir = create_locale_folder();
    let signals = RequestSignals::new()
        .with_session_value("locale", "fr_FR")
        .with_parameter("locale", "en_US");

    let resolution =
        LocaleResolver::resolve(&create_settings(&temp_dir, "session"), &signals).unwrap();
    assert_eq!(resolution.locale.tag(), "en_US");
}

#[test]
fn test_unsupported_locale_degrades_to_default() {
    let temp_dir = create_locale_folder();
    let signals = RequestSignals::new().with_parameter("locale", "ja_JP");

    let localizer = Localizer::new(create_settings(&temp_dir, "request"), &signals).unwrap();
    assert_eq!(localizer.settings().preferred_locale().tag(), "en_US");
    assert_eq!(localizer.reader().get_translation("hello", None).unwrap(), "Hello");
}

#[test]
fn test_default_locale_without_catalogs_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write_catalog(&temp_dir, "fr_FR", "messages", r#"{"hello": "Bonjour"}"#);

    let result = Localizer::new(create_settings(&temp_dir, "header"), &RequestSignals::new());
    assert!(matches!(result, Err(I18nError::Configuration(_))));
}

#[test]
fn test_unknown_detection_method_rejected() {
    let temp_dir = create_locale_folder();
    let attributes: HashMap<String, String> = [
        ("method".to_string(), "cookie".to_string()),
        ("locale".to_string(), "en_US".to_string()),
        ("folder".to_string(), temp_dir.path().display().to_string()),
    ]
    .into_iter()
    .collect();

    assert!(matches!(
        Settings::from_attributes(&attributes),
        Err(I18nError::Configuration(_))
    ));
}

// ==================== Reader Tests ====================

#[test]
fn test_domain_fallback_to_default_locale() {
    let temp_dir = create_locale_folder();
    let signals = RequestSignals::new().with_parameter("locale", "fr_FR");
    let localizer = Localizer::new(create_settings(&temp_dir, "request"), &signals).unwrap();

    let mut reader = localizer.reader();
    assert_eq!(reader.get_translation("window", Some("house")).unwrap(), "Window");
    assert_eq!(reader.get_translation("hello", None).unwrap(), "Bonjour");
}

#[test]
fn test_missing_key_returns_key() {
    let temp_dir = create_locale_folder();
    let localizer = Localizer::new(create_settings(&temp_dir, "header"), &RequestSignals::new()).unwrap();

    assert_eq!(
        localizer.reader().get_translation("no_such_key", None).unwrap(),
        "no_such_key"
    );
}

#[test]
fn test_missing_domain_is_recoverable() {
    let temp_dir = create_locale_folder();
    let localizer = Localizer::new(create_settings(&temp_dir, "header"), &RequestSignals::new()).unwrap();

    let mut reader = localizer.reader();
    let result = reader.get_translation("x", Some("garden"));
    assert!(matches!(result, Err(I18nError::DomainNotFound(ref d)) if d == "garden"));

    // reader still usable afterwards
    assert_eq!(reader.get_translation("hello", None).unwrap(), "Hello");
}

#[test]
fn test_corrupt_catalog_is_surfaced() {
    let temp_dir = create_locale_folder();
    write_catalog(&temp_dir, "fr_FR", "house", r#"{"door": ["Porte"]}"#);

    let signals = RequestSignals::new().with_parameter("locale", "fr_FR");
    let localizer = Localizer::new(create_settings(&temp_dir, "request"), &signals).unwrap();

    let result = localizer.reader().get_translation("door", Some("house"));
    assert!(matches!(result, Err(I18nError::TranslationInvalid(_))));
}

// ==================== Writer Tests ====================

#[test]
fn test_write_then_fresh_read() {
    let temp_dir = create_locale_folder();
    let localizer = Localizer::new(create_settings(&temp_dir, "header"), &RequestSignals::new()).unwrap();

    let mut writer = localizer.writer(None).unwrap();
    writer.set_translation("test", "me");
    writer.save().unwrap();

    assert_eq!(localizer.reader().get_translation("test", None).unwrap(), "me");

    let contents: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("en_US").join("messages.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(contents["test"], "me");
}

#[test]
fn test_unset_then_fresh_read() {
    let temp_dir = create_locale_folder();
    let localizer = Localizer::new(create_settings(&temp_dir, "header"), &RequestSignals::new()).unwrap();

    let mut writer = localizer.writer(None).unwrap();
    writer.unset_translation("bye");
    writer.save().unwrap();

    assert_eq!(localizer.reader().get_translation("bye", None).unwrap(), "bye");
    assert_eq!(localizer.reader().get_translation("hello", None).unwrap(), "Hello");
}

#[test]
fn test_editing_missing_catalog_seeds_from_default() {
    let temp_dir = create_locale_folder();
    let mut settings = create_settings(&temp_dir, "request");
    settings
        .set_preferred_locale(LocaleIdentifier::parse("fr_FR").unwrap())
        .unwrap();

    let mut editor = TranslationEditor::new(&settings, Some("house")).unwrap();
    editor.set_translation("door", "Porte");
    editor.save().unwrap();

    let mut store = TranslationStore::new(&settings);
    assert_eq!(store.get_translation("door", Some("house")).unwrap(), "Porte");
    assert_eq!(store.get_translation("window", Some("house")).unwrap(), "Window");

    // default catalog untouched
    let default_content =
        std::fs::read_to_string(temp_dir.path().join("en_US").join("house.json")).unwrap();
    assert!(default_content.contains("\"Door\""));
}

#[test]
fn test_save_twice_is_byte_identical() {
    let temp_dir = create_locale_folder();
    let localizer = Localizer::new(create_settings(&temp_dir, "header"), &RequestSignals::new()).unwrap();
    let path = temp_dir.path().join("en_US").join("messages.json");

    let mut writer = localizer.writer(None).unwrap();
    writer.set_translation("zeta", "Z");
    writer.save().unwrap();
    let first = std::fs::read(&path).unwrap();
    writer.save().unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_key_order_survives_save() {
    let temp_dir = create_locale_folder();
    let localizer = Localizer::new(create_settings(&temp_dir, "header"), &RequestSignals::new()).unwrap();

    let mut writer = localizer.writer(Some("house")).unwrap();
    writer.set_translation("roof", "Roof");
    writer.set_translation("door", "Front door");
    writer.save().unwrap();

    let mut reader = localizer.reader();
    let keys: Vec<String> = reader
        .translations(Some("house"))
        .unwrap()
        .iter()
        .map(|(k, _)| k.to_string())
        .collect();
    assert_eq!(keys, vec!["door", "window", "roof"]);
}

#[test]
fn test_detection_method_is_closed() {
    assert_eq!(
        "header".parse::<DetectionMethod>().unwrap(),
        DetectionMethod::Header
    );
    assert!("HEADER".parse::<DetectionMethod>().is_err());
}
