//! Theme Engine: dark mode style override for the browser chrome.
//!
//! Light mode is the chrome's own stylesheet; dark mode layers a fixed
//! override on top of it. Page content is never restyled.

use std::collections::BTreeMap;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_dark_mode(&mut self, dark: bool);
    fn get_css_variables(&self) -> BTreeMap<String, String>;
    fn style_override(&self) -> Option<String>;
}

/// Dark chrome colors.
struct DarkPalette;
impl DarkPalette {
    const WINDOW_BG: &'static str = "#333";
    const TOOLBAR_BG: &'static str = "#444";
    const INPUT_BG: &'static str = "#555";
    const TAB_BG: &'static str = "#444";
    const TEXT: &'static str = "#FFF";
}

/// The theme engine implementation.
pub struct ThemeEngine {
    dark: bool,
}

impl ThemeEngine {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_dark_mode(&mut self, dark: bool) {
        self.dark = dark;
    }

    /// Variables consumed by the chrome stylesheet. Empty in light mode.
    fn get_css_variables(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        if !self.dark {
            return vars;
        }
        vars.insert("--window-bg".into(), DarkPalette::WINDOW_BG.into());
        vars.insert("--toolbar-bg".into(), DarkPalette::TOOLBAR_BG.into());
        vars.insert("--input-bg".into(), DarkPalette::INPUT_BG.into());
        vars.insert("--tab-bg".into(), DarkPalette::TAB_BG.into());
        vars.insert("--text-color".into(), DarkPalette::TEXT.into());
        vars
    }

    fn style_override(&self) -> Option<String> {
        if !self.dark {
            return None;
        }
        let declarations: String = self
            .get_css_variables()
            .iter()
            .map(|(k, v)| format!("{}:{};", k, v))
            .collect();
        Some(format!(":root{{{}}}", declarations))
    }
}
