use serde::{Deserialize, Serialize};

pub const DEFAULT_HOME_PAGE: &str = "https://www.google.com";

/// Process-wide browser settings. Held in memory only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserSettings {
    pub home_page: String,
    pub search_engine: SearchEngine,
    pub private_mode: bool,
    pub dark_mode: bool,
    pub ad_blocker_enabled: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            home_page: DEFAULT_HOME_PAGE.to_string(),
            search_engine: SearchEngine::Google,
            private_mode: false,
            dark_mode: false,
            ad_blocker_enabled: true,
        }
    }
}

/// The search engines offered in the settings dialog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    Bing,
    DuckDuckGo,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 3] = [SearchEngine::Google, SearchEngine::Bing, SearchEngine::DuckDuckGo];

    /// Query URL prefix; the raw address-bar text is appended verbatim.
    pub fn query_template(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::Bing => "Bing",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
        }
    }
}
