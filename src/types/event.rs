//! Messages exchanged between the controller and the UI shell.
//!
//! The shell turns engine callbacks into [`EngineEvent`]s and hands them to
//! `App::handle_event`; every controller operation answers with a list of
//! [`ViewCommand`]s that the shell applies to the window and webviews.

use serde::{Deserialize, Serialize};

use super::download::DownloadItem;
use super::settings::BrowserSettings;

/// Callbacks reported by a tab's engine view.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The top-level URL of a tab changed.
    UrlChanged { tab_id: String, url: String },
    /// The document title of a tab changed.
    TitleChanged { tab_id: String, title: String },
    /// A tab finished loading its page.
    LoadFinished { tab_id: String },
    /// A download was accepted by the engine and is being written to `filepath`.
    DownloadRequested { tab_id: String, url: String, filepath: String },
    /// A download ended, successfully or not.
    DownloadFinished { url: String, filepath: Option<String>, success: bool },
    /// The request filter refused a navigation.
    RequestBlocked { tab_id: String, url: String },
}

/// Entry of the tab strip as rendered by the chrome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSummary {
    pub id: String,
    pub label: String,
    pub url: String,
}

/// Instructions from the controller to the UI shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Create the content view for a new tab.
    OpenTab { tab_id: String, url: String, ad_filter: bool },
    /// Destroy the content view of a closed tab.
    CloseTab { tab_id: String },
    /// Make the given tab's view the visible one.
    ShowTab { tab_id: String },
    LoadUrl { tab_id: String, url: String },
    GoBack { tab_id: String },
    GoForward { tab_id: String },
    Reload { tab_id: String },
    SetAddressBar(String),
    /// Redraw the tab strip from the current tab list.
    SyncTabs { tabs: Vec<TabSummary>, active_id: String },
    /// Apply a stylesheet override to the chrome, or clear it with `None`.
    SetStyle(Option<String>),
    /// Informational message box.
    Notify { title: String, message: String },
    ShowHistory(Vec<String>),
    ShowDownloads(Vec<DownloadItem>),
    ShowSettings(BrowserSettings),
}
