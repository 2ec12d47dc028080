//! App Core for Tabbrowser.
//!
//! Central struct owning the tab list, user data store, downloads, settings
//! and theme. Each toolbar action is one method; engine callbacks go through
//! [`App::handle_event`]. Every operation answers with the [`ViewCommand`]s
//! the UI shell has to apply, so the controller runs without a window.

use tracing::{debug, error, info, warn};

use crate::managers::download_manager::{DownloadManager, DownloadManagerTrait};
use crate::managers::tab_manager::{label_for_title, TabManager, TabManagerTrait};
use crate::platform::AppPaths;
use crate::services::navigation::resolve_input;
use crate::services::request_filter::{RequestFilter, RequestFilterTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::services::user_data_store::{UserDataStore, UserDataStoreTrait};
use crate::types::event::{EngineEvent, TabSummary, ViewCommand};
use crate::types::settings::{BrowserSettings, SearchEngine};

/// Label of the tab opened at startup.
pub const HOME_TAB_LABEL: &str = "home";

/// Central application struct holding all managers and services.
pub struct App {
    pub tab_manager: TabManager,
    pub download_manager: DownloadManager,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub request_filter: RequestFilter,
    pub store: UserDataStore,
    /// Why the data file could not be loaded, shown once at startup.
    load_error: Option<String>,
}

impl App {
    /// Creates the app and loads the user data file.
    ///
    /// A missing file means a first run. A malformed one is moved aside by
    /// the store and the browser starts with empty bookmarks and history;
    /// [`App::ui_ready`] tells the user.
    pub fn new(paths: AppPaths, settings: BrowserSettings) -> Self {
        let mut store = UserDataStore::new(paths.user_data_file);
        let load_error = match store.load() {
            Ok(_) => None,
            Err(e) => {
                warn!("Starting with empty user data: {}", e);
                Some(e.to_string())
            }
        };

        let theme_engine = ThemeEngine::new(settings.dark_mode);
        Self {
            tab_manager: TabManager::new(),
            download_manager: DownloadManager::new(paths.downloads_dir),
            settings_engine: SettingsEngine::new(settings),
            theme_engine,
            request_filter: RequestFilter::new(),
            store,
            load_error,
        }
    }

    /// Startup sequence: open the home tab and apply the initial theme.
    pub fn startup(&mut self) -> Vec<ViewCommand> {
        info!(
            path = %self.store.get_path().display(),
            bookmarks = self.store.data().bookmarks.len(),
            history = self.store.data().history.len(),
            "starting browser"
        );
        let mut commands = vec![ViewCommand::SetStyle(self.theme_engine.style_override())];
        commands.extend(self.new_tab(None, Some(HOME_TAB_LABEL)));
        commands
    }

    /// The chrome page finished loading: resend its state. A data file that
    /// failed to load is reported here, the first time only.
    pub fn ui_ready(&mut self) -> Vec<ViewCommand> {
        let mut commands = vec![ViewCommand::SetStyle(self.theme_engine.style_override()), self.sync_tabs()];
        if let Some((_, url)) = self.current_tab_snapshot() {
            commands.push(ViewCommand::SetAddressBar(url));
        }
        if let Some(error) = self.load_error.take() {
            commands.push(notify(
                "User data not loaded",
                format!("{}. Bookmarks and history start empty.", error),
            ));
        }
        commands
    }

    pub fn shutdown(&mut self) {
        info!(
            tabs = self.tab_manager.tab_count(),
            blocked = self.request_filter.blocked_count(),
            "shutting down"
        );
    }

    pub fn settings(&self) -> &BrowserSettings {
        self.settings_engine.get_settings()
    }

    pub fn bookmarks(&self) -> &[String] {
        &self.store.data().bookmarks
    }

    pub fn history(&self) -> &[String] {
        &self.store.data().history
    }

    // ─── Tabs ───

    /// Opens a tab on `url` (home page when omitted) and makes it active.
    ///
    /// The request filter is attached if the ad blocker is enabled right now;
    /// later changes to the setting leave this tab as it is.
    pub fn new_tab(&mut self, url: Option<&str>, label: Option<&str>) -> Vec<ViewCommand> {
        let settings = self.settings_engine.get_settings();
        let url = url.unwrap_or(settings.home_page.as_str()).to_string();
        let ad_filter = settings.ad_blocker_enabled;

        let index = self.tab_manager.add_tab(&url, label, ad_filter);
        let tab_id = match self.tab_manager.get_tab(index) {
            Some(tab) => tab.id.clone(),
            None => return Vec::new(),
        };
        debug!(%tab_id, %url, ad_filter, "opened tab");

        vec![
            ViewCommand::OpenTab { tab_id: tab_id.clone(), url: url.clone(), ad_filter },
            ViewCommand::ShowTab { tab_id },
            ViewCommand::SetAddressBar(url),
            self.sync_tabs(),
        ]
    }

    /// Closes the tab at `index`. Closing the only tab does nothing.
    pub fn close_tab(&mut self, index: usize) -> Vec<ViewCommand> {
        let tab_id = match self.tab_manager.get_tab(index) {
            Some(tab) => tab.id.clone(),
            None => {
                warn!(index, "close requested for unknown tab");
                return Vec::new();
            }
        };

        match self.tab_manager.close_tab(index) {
            Ok(true) => {
                debug!(%tab_id, "closed tab");
                let mut commands = vec![ViewCommand::CloseTab { tab_id }];
                commands.extend(self.show_current());
                commands
            }
            Ok(false) => Vec::new(),
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    pub fn close_tab_by_id(&mut self, tab_id: &str) -> Vec<ViewCommand> {
        match self.tab_manager.index_of(tab_id) {
            Some(index) => self.close_tab(index),
            None => Vec::new(),
        }
    }

    pub fn switch_tab(&mut self, index: usize) -> Vec<ViewCommand> {
        match self.tab_manager.switch_tab(index) {
            Ok(()) => self.show_current(),
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    pub fn switch_tab_by_id(&mut self, tab_id: &str) -> Vec<ViewCommand> {
        match self.tab_manager.index_of(tab_id) {
            Some(index) => self.switch_tab(index),
            None => Vec::new(),
        }
    }

    fn show_current(&self) -> Vec<ViewCommand> {
        let Some(tab) = self.tab_manager.current_tab() else {
            return Vec::new();
        };
        vec![
            ViewCommand::ShowTab { tab_id: tab.id.clone() },
            ViewCommand::SetAddressBar(tab.url.clone()),
            self.sync_tabs(),
        ]
    }

    /// Id and URL of the active tab.
    pub fn current_tab_snapshot(&self) -> Option<(String, String)> {
        self.tab_manager.current_tab().map(|t| (t.id.clone(), t.url.clone()))
    }

    pub fn theme_engine_style(&self) -> Option<String> {
        self.theme_engine.style_override()
    }

    pub fn tab_summaries(&self) -> Vec<TabSummary> {
        self.tab_manager
            .get_all_tabs()
            .iter()
            .map(|t| TabSummary { id: t.id.clone(), label: t.label.clone(), url: t.url.clone() })
            .collect()
    }

    fn sync_tabs(&self) -> ViewCommand {
        ViewCommand::SyncTabs {
            tabs: self.tab_summaries(),
            active_id: self.tab_manager.current_tab().map(|t| t.id.clone()).unwrap_or_default(),
        }
    }

    fn current_tab_id(&self) -> Option<String> {
        self.tab_manager.current_tab().map(|t| t.id.clone())
    }

    // ─── Navigation ───

    /// Loads the address-bar text in the current tab, as a URL or a search.
    pub fn navigate(&mut self, input: &str) -> Vec<ViewCommand> {
        let Some(tab_id) = self.current_tab_id() else {
            return Vec::new();
        };
        let target = resolve_input(input, self.settings().search_engine);
        debug!(?target, "navigate");
        vec![ViewCommand::LoadUrl { tab_id, url: target.into_url() }]
    }

    pub fn navigate_home(&mut self) -> Vec<ViewCommand> {
        let Some(tab_id) = self.current_tab_id() else {
            return Vec::new();
        };
        vec![ViewCommand::LoadUrl { tab_id, url: self.settings().home_page.clone() }]
    }

    pub fn back(&self) -> Vec<ViewCommand> {
        self.current_tab_id().map(|tab_id| ViewCommand::GoBack { tab_id }).into_iter().collect()
    }

    pub fn forward(&self) -> Vec<ViewCommand> {
        self.current_tab_id().map(|tab_id| ViewCommand::GoForward { tab_id }).into_iter().collect()
    }

    pub fn reload(&self) -> Vec<ViewCommand> {
        self.current_tab_id().map(|tab_id| ViewCommand::Reload { tab_id }).into_iter().collect()
    }

    // ─── Bookmarks, history, downloads ───

    /// Bookmarks the current tab's URL. Private mode does not prevent this.
    pub fn add_bookmark(&mut self) -> Vec<ViewCommand> {
        let Some(url) = self.tab_manager.current_tab().map(|t| t.url.clone()) else {
            return Vec::new();
        };
        match self.store.add_bookmark(&url) {
            Ok(true) => {
                info!(%url, "bookmark added");
                vec![notify("Bookmark added", format!("Bookmark added: {}", url))]
            }
            Ok(false) => Vec::new(),
            Err(e) => {
                error!("Failed to save bookmark: {}", e);
                vec![notify("Bookmark not saved", e.to_string())]
            }
        }
    }

    pub fn show_history(&self) -> Vec<ViewCommand> {
        vec![ViewCommand::ShowHistory(self.history().to_vec())]
    }

    /// Snapshot of the download list; it does not update while open.
    pub fn show_downloads(&self) -> Vec<ViewCommand> {
        vec![ViewCommand::ShowDownloads(self.download_manager.list_downloads().to_vec())]
    }

    // ─── Settings & modes ───

    pub fn show_settings(&self) -> Vec<ViewCommand> {
        vec![ViewCommand::ShowSettings(self.settings().clone())]
    }

    pub fn toggle_private_mode(&mut self) -> Vec<ViewCommand> {
        let private = self.settings_engine.toggle_private_mode();
        info!(private, "private mode toggled");
        let message = if private {
            "Private mode is on. History will not be saved."
        } else {
            "Private mode is off. History will be saved."
        };
        vec![notify("Private mode", message.to_string())]
    }

    /// Switches the chrome between light and dark styling.
    pub fn toggle_theme(&mut self) -> Vec<ViewCommand> {
        let dark = self.settings_engine.toggle_dark_mode();
        self.theme_engine.set_dark_mode(dark);
        let name = if dark { "dark" } else { "light" };
        vec![
            ViewCommand::SetStyle(self.theme_engine.style_override()),
            notify("Theme changed", format!("Theme set to {} mode.", name)),
        ]
    }

    pub fn set_home_page(&mut self, url: &str) -> Vec<ViewCommand> {
        self.settings_engine.set_home_page(url);
        vec![notify("Home page updated", format!("Home page set to: {}", url))]
    }

    pub fn set_search_engine(&mut self, engine: SearchEngine) -> Vec<ViewCommand> {
        self.settings_engine.set_search_engine(engine);
        vec![notify(
            "Search engine updated",
            format!("Search engine set to: {}", engine.display_name()),
        )]
    }

    /// Changes the ad blocker setting for tabs opened from now on.
    pub fn set_ad_blocker_enabled(&mut self, enabled: bool) -> Vec<ViewCommand> {
        self.settings_engine.set_ad_blocker_enabled(enabled);
        let state = if enabled { "enabled" } else { "disabled" };
        vec![notify("Ad blocker", format!("Ad blocker {}.", state))]
    }

    // ─── Engine events ───

    /// Single dispatch point for engine callbacks.
    pub fn handle_event(&mut self, event: EngineEvent) -> Vec<ViewCommand> {
        match event {
            EngineEvent::UrlChanged { tab_id, url } => self.on_url_changed(&tab_id, &url),
            EngineEvent::TitleChanged { tab_id, title } => {
                if let Err(e) = self.tab_manager.update_page_title(&tab_id, &title) {
                    debug!("title for closed tab: {}", e);
                }
                Vec::new()
            }
            EngineEvent::LoadFinished { tab_id } => self.on_load_finished(&tab_id),
            EngineEvent::DownloadRequested { tab_id, url, filepath } => {
                let id = self.download_manager.register(&url, &filepath);
                info!(%tab_id, %url, %filepath, download = %id, "download accepted");
                self.show_downloads()
            }
            EngineEvent::DownloadFinished { url, filepath, success } => {
                match self.download_manager.complete(&url, filepath.as_deref(), success) {
                    Ok(id) => info!(download = %id, success, "download finished"),
                    Err(e) => warn!("{}", e),
                }
                Vec::new()
            }
            EngineEvent::RequestBlocked { tab_id, url } => {
                debug!(%tab_id, "blocked navigation");
                self.request_filter.record_blocked(&url);
                Vec::new()
            }
        }
    }

    fn on_url_changed(&mut self, tab_id: &str, url: &str) -> Vec<ViewCommand> {
        if let Err(e) = self.tab_manager.update_tab_url(tab_id, url) {
            debug!("url change for closed tab: {}", e);
            return Vec::new();
        }

        if !self.settings().private_mode {
            if let Err(e) = self.store.record_visit(url) {
                error!("Failed to save history: {}", e);
            }
        }

        let is_active = self.current_tab_id().as_deref() == Some(tab_id);
        if is_active {
            vec![ViewCommand::SetAddressBar(url.to_string())]
        } else {
            Vec::new()
        }
    }

    fn on_load_finished(&mut self, tab_id: &str) -> Vec<ViewCommand> {
        // An untitled page is labelled by its URL.
        let Some(title) = self
            .tab_manager
            .find_by_id(tab_id)
            .map(|t| if t.page_title.is_empty() { t.url.clone() } else { t.page_title.clone() })
        else {
            return Vec::new();
        };
        if title.is_empty() {
            return Vec::new();
        }
        if let Err(e) = self.tab_manager.set_tab_label(tab_id, &label_for_title(&title)) {
            warn!("{}", e);
            return Vec::new();
        }
        vec![self.sync_tabs()]
    }
}

fn notify(title: &str, message: String) -> ViewCommand {
    ViewCommand::Notify { title: title.to_string(), message }
}
