//! Chrome IPC handler for Tabbrowser.
//!
//! The chrome webview posts JSON messages of the form `{"cmd": "...", ...}`.
//! They are decoded into [`IpcMessage`] and dispatched to the matching `App`
//! operation here, outside the GUI layer, so the mapping can be unit-tested.

use serde::Deserialize;
use tracing::debug;

use crate::app::App;
use crate::types::event::ViewCommand;
use crate::types::settings::SearchEngine;

/// Messages sent by the chrome (toolbar, tab strip, dialogs).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcMessage {
    UiReady,
    Back,
    Forward,
    Reload,
    Home,
    Navigate { url: String },
    Bookmark,
    History,
    Downloads,
    NewTab,
    CloseTab { id: String },
    SwitchTab { id: String },
    PrivateMode,
    Settings,
    ToggleTheme,
    SetHomePage { url: String },
    SetSearchEngine { engine: SearchEngine },
    SetAdBlocker { enabled: bool },
    DialogClosed,
}

/// Decodes one IPC message body.
pub fn parse_message(body: &str) -> Result<IpcMessage, serde_json::Error> {
    serde_json::from_str(body)
}

/// Dispatch a chrome message to the appropriate `App` operation.
pub fn handle_message(app: &mut App, message: IpcMessage) -> Vec<ViewCommand> {
    debug!(?message, "chrome message");
    match message {
        IpcMessage::UiReady => app.ui_ready(),
        IpcMessage::Back => app.back(),
        IpcMessage::Forward => app.forward(),
        IpcMessage::Reload => app.reload(),
        IpcMessage::Home => app.navigate_home(),
        IpcMessage::Navigate { url } => app.navigate(&url),
        IpcMessage::Bookmark => app.add_bookmark(),
        IpcMessage::History => app.show_history(),
        IpcMessage::Downloads => app.show_downloads(),
        IpcMessage::NewTab => app.new_tab(None, None),
        IpcMessage::CloseTab { id } => app.close_tab_by_id(&id),
        IpcMessage::SwitchTab { id } => app.switch_tab_by_id(&id),
        IpcMessage::PrivateMode => app.toggle_private_mode(),
        IpcMessage::Settings => app.show_settings(),
        IpcMessage::ToggleTheme => app.toggle_theme(),
        IpcMessage::SetHomePage { url } => app.set_home_page(&url),
        IpcMessage::SetSearchEngine { engine } => app.set_search_engine(engine),
        IpcMessage::SetAdBlocker { enabled } => app.set_ad_blocker_enabled(enabled),
        IpcMessage::DialogClosed => app
            .current_tab_snapshot()
            .map(|(tab_id, _)| ViewCommand::ShowTab { tab_id })
            .into_iter()
            .collect(),
    }
}
