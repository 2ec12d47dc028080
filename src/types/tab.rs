use serde::{Deserialize, Serialize};

/// Label given to tabs opened without an explicit one.
pub const DEFAULT_TAB_LABEL: &str = "new tab";

/// A browsing surface: one content webview plus the label shown in the tab strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub label: String,
    /// Last document title reported by the engine, applied to `label` on load finish.
    pub page_title: String,
    /// Whether the request filter was attached when the tab was created.
    pub ad_filter: bool,
    pub created_at: i64,
}
