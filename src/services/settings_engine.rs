// Tabbrowser Settings Engine
// Holds the process-wide browser settings.
// Settings live for the lifetime of the process and are never written to disk.

use crate::types::settings::{BrowserSettings, SearchEngine};

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn get_settings(&self) -> &BrowserSettings;
    fn set_home_page(&mut self, url: &str);
    fn set_search_engine(&mut self, engine: SearchEngine);
    fn set_ad_blocker_enabled(&mut self, enabled: bool);
    fn toggle_private_mode(&mut self) -> bool;
    fn toggle_dark_mode(&mut self) -> bool;
}

/// In-memory settings engine.
pub struct SettingsEngine {
    settings: BrowserSettings,
}

impl SettingsEngine {
    pub fn new(settings: BrowserSettings) -> Self {
        Self { settings }
    }
}

impl Default for SettingsEngine {
    fn default() -> Self {
        Self::new(BrowserSettings::default())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    fn set_home_page(&mut self, url: &str) {
        self.settings.home_page = url.to_string();
    }

    fn set_search_engine(&mut self, engine: SearchEngine) {
        self.settings.search_engine = engine;
    }

    fn set_ad_blocker_enabled(&mut self, enabled: bool) {
        self.settings.ad_blocker_enabled = enabled;
    }

    /// Flips private mode and returns the new state.
    fn toggle_private_mode(&mut self) -> bool {
        self.settings.private_mode = !self.settings.private_mode;
        self.settings.private_mode
    }

    /// Flips dark mode and returns the new state.
    fn toggle_dark_mode(&mut self) -> bool {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.settings.dark_mode
    }
}
