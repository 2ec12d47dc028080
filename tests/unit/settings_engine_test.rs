//! Integration-level unit tests for the SettingsEngine public API.

use tabbrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tabbrowser::types::settings::{BrowserSettings, SearchEngine, DEFAULT_HOME_PAGE};

#[test]
fn test_defaults() {
    let engine = SettingsEngine::default();
    let settings = engine.get_settings();
    assert_eq!(settings.home_page, DEFAULT_HOME_PAGE);
    assert_eq!(settings.search_engine, SearchEngine::Google);
    assert!(!settings.private_mode);
    assert!(!settings.dark_mode);
    assert!(settings.ad_blocker_enabled);
}

#[test]
fn test_typed_setters() {
    let mut engine = SettingsEngine::default();
    engine.set_home_page("https://example.org");
    engine.set_search_engine(SearchEngine::DuckDuckGo);
    engine.set_ad_blocker_enabled(false);

    let settings = engine.get_settings();
    assert_eq!(settings.home_page, "https://example.org");
    assert_eq!(settings.search_engine, SearchEngine::DuckDuckGo);
    assert!(!settings.ad_blocker_enabled);
}

#[test]
fn test_toggles_return_new_state() {
    let mut engine = SettingsEngine::default();
    assert!(engine.toggle_private_mode());
    assert!(!engine.toggle_private_mode());
    assert!(engine.toggle_dark_mode());
    assert!(engine.get_settings().dark_mode);
}

#[test]
fn test_engine_starts_from_given_settings() {
    let settings = BrowserSettings {
        home_page: "https://example.org".to_string(),
        dark_mode: true,
        ..BrowserSettings::default()
    };
    let engine = SettingsEngine::new(settings.clone());
    assert_eq!(engine.get_settings(), &settings);
}

#[test]
fn test_search_engine_names_match_serialized_form() {
    for engine in SearchEngine::ALL {
        assert_eq!(serde_json::to_value(engine).unwrap(), serde_json::json!(engine.display_name()));
    }
}
