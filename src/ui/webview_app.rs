//! WebView-based browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - One chrome webview fills the window and renders the tab strip, toolbar
//!   and dialogs from `resources/ui`.
//! - Every tab owns a content webview placed below the chrome; only the
//!   active one is visible. While a dialog is open the content view is hidden
//!   so the chrome overlay shows through.
//! - Engine callbacks and chrome IPC are posted to the event loop as
//!   [`UserEvent`]s. The loop thread owns the [`App`] and applies the
//!   [`ViewCommand`]s it returns.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use tracing::{debug, error, info, warn};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::app::App;
use crate::ipc_handler::{handle_message, parse_message, IpcMessage};
use crate::managers::download_manager::{destination_for, suggested_filename, DownloadManagerTrait};
use crate::platform::AppPaths;
use crate::services::navigation::PageUrl;
use crate::services::request_filter::{should_block, RequestFilterTrait};
use crate::types::event::{EngineEvent, ViewCommand};
use crate::types::settings::{BrowserSettings, SearchEngine};

/// Height of tab strip plus toolbar, in logical pixels.
const CHROME_HEIGHT: f64 = 80.0;

const CHROME_CSS: &str = include_str!("../../resources/ui/chrome.css");
const CHROME_BODY: &str = include_str!("../../resources/ui/chrome.html");
const CHROME_JS: &str = include_str!("../../resources/ui/chrome.js");

#[derive(Debug)]
enum UserEvent {
    Chrome(IpcMessage),
    Engine(EngineEvent),
    /// A page asked for a new window; it opens as a tab instead.
    OpenInNewTab(String),
}

fn chrome_html() -> String {
    let mut html = String::with_capacity(CHROME_CSS.len() + CHROME_BODY.len() + CHROME_JS.len() + 200);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(CHROME_CSS);
    html.push_str("</style></head><body>");
    html.push_str(CHROME_BODY);
    html.push_str("<script>");
    html.push_str(CHROME_JS);
    html.push_str("</script></body></html>");
    html
}

/// The window plus the container child webviews are attached to.
struct Host {
    window: Window,
    #[cfg(target_os = "linux")]
    fixed: gtk::Fixed,
}

impl Host {
    fn new(window: Window) -> Result<Self, Box<dyn std::error::Error>> {
        #[cfg(target_os = "linux")]
        {
            use gtk::prelude::*;
            use tao::platform::unix::WindowExtUnix;
            let fixed = gtk::Fixed::new();
            let vbox = window.default_vbox().ok_or("window has no GTK container")?;
            vbox.pack_start(&fixed, true, true, 0);
            fixed.show_all();
            Ok(Self { window, fixed })
        }
        #[cfg(not(target_os = "linux"))]
        {
            Ok(Self { window })
        }
    }

    fn build(&self, builder: WebViewBuilder<'_>) -> wry::Result<WebView> {
        #[cfg(target_os = "linux")]
        {
            use wry::WebViewBuilderExtUnix;
            builder.build_gtk(&self.fixed)
        }
        #[cfg(not(target_os = "linux"))]
        {
            builder.build_as_child(&self.window)
        }
    }

    fn logical_size(&self) -> (f64, f64) {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        (size.width, size.height)
    }

    fn chrome_bounds(&self) -> Rect {
        let (width, height) = self.logical_size();
        Rect {
            position: LogicalPosition::new(0, 0).into(),
            size: LogicalSize::new(width, height).into(),
        }
    }

    fn content_bounds(&self) -> Rect {
        let (width, height) = self.logical_size();
        Rect {
            position: LogicalPosition::new(0, CHROME_HEIGHT as i32).into(),
            size: LogicalSize::new(width, (height - CHROME_HEIGHT).max(0.0)).into(),
        }
    }
}

/// Owns the webviews and applies controller commands to them.
struct Shell {
    host: Host,
    chrome: WebView,
    tabs: HashMap<String, WebView>,
    proxy: EventLoopProxy<UserEvent>,
    downloads_dir: PathBuf,
    filter_script: String,
}

impl Shell {
    fn apply_all(&mut self, commands: Vec<ViewCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::OpenTab { tab_id, url, ad_filter } => {
                match self.open_tab_view(&tab_id, &url, ad_filter) {
                    Ok(view) => {
                        self.tabs.insert(tab_id, view);
                    }
                    Err(e) => error!("Failed to create tab view: {}", e),
                }
            }
            ViewCommand::CloseTab { tab_id } => {
                self.tabs.remove(&tab_id);
            }
            ViewCommand::ShowTab { tab_id } => {
                for (id, view) in &self.tabs {
                    if let Err(e) = view.set_visible(*id == tab_id) {
                        warn!("Failed to toggle tab view: {}", e);
                    }
                }
            }
            ViewCommand::LoadUrl { tab_id, url } => {
                if let Some(view) = self.tabs.get(&tab_id) {
                    info!("[LOAD] {}", url);
                    if let Err(e) = view.load_url(&url) {
                        warn!("Failed to load {}: {}", url, e);
                    }
                }
            }
            ViewCommand::GoBack { tab_id } => self.eval_in_tab(&tab_id, "history.back()"),
            ViewCommand::GoForward { tab_id } => self.eval_in_tab(&tab_id, "history.forward()"),
            ViewCommand::Reload { tab_id } => self.eval_in_tab(&tab_id, "location.reload()"),
            ViewCommand::SetAddressBar(url) => self.call_chrome("setAddressBar", serde_json::json!(url)),
            ViewCommand::SyncTabs { tabs, active_id } => {
                self.call_chrome("syncTabs", serde_json::json!({"tabs": tabs, "activeId": active_id}))
            }
            ViewCommand::SetStyle(css) => self.call_chrome("setStyle", serde_json::json!(css)),
            ViewCommand::Notify { title, message } => {
                self.hide_content();
                self.call_chrome("notify", serde_json::json!({"title": title, "message": message}));
            }
            ViewCommand::ShowHistory(urls) => {
                self.hide_content();
                self.call_chrome("showHistory", serde_json::json!(urls));
            }
            ViewCommand::ShowDownloads(items) => {
                self.hide_content();
                self.call_chrome("showDownloads", serde_json::json!(items));
            }
            ViewCommand::ShowSettings(settings) => {
                self.hide_content();
                self.call_chrome("showSettings", settings_payload(&settings));
            }
        }
    }

    fn hide_content(&self) {
        for view in self.tabs.values() {
            let _ = view.set_visible(false);
        }
    }

    fn call_chrome(&self, function: &str, payload: serde_json::Value) {
        let js = format!("if(window.__tb)__tb.{}({})", function, payload);
        if let Err(e) = self.chrome.evaluate_script(&js) {
            warn!("Chrome script failed: {}", e);
        }
    }

    fn eval_in_tab(&self, tab_id: &str, js: &str) {
        if let Some(view) = self.tabs.get(tab_id) {
            if let Err(e) = view.evaluate_script(js) {
                warn!("Tab script failed: {}", e);
            }
        }
    }

    fn layout(&self) {
        if let Err(e) = self.chrome.set_bounds(self.host.chrome_bounds()) {
            warn!("Failed to resize chrome: {}", e);
        }
        let bounds = self.host.content_bounds();
        for view in self.tabs.values() {
            let _ = view.set_bounds(bounds);
        }
    }

    /// Builds the content view of a tab and wires its engine callbacks.
    ///
    /// The request filter is fixed here: tabs opened while the ad blocker is
    /// off stay unfiltered, and the other way round.
    fn open_tab_view(&self, tab_id: &str, url: &str, ad_filter: bool) -> wry::Result<WebView> {
        let nav_proxy = self.proxy.clone();
        let nav_tab = tab_id.to_string();
        let load_proxy = self.proxy.clone();
        let load_tab = tab_id.to_string();
        let page_seen = Mutex::new(PageUrl::default());
        let title_proxy = self.proxy.clone();
        let title_tab = tab_id.to_string();
        let dl_proxy = self.proxy.clone();
        let dl_tab = tab_id.to_string();
        let dl_dir = self.downloads_dir.clone();
        let done_proxy = self.proxy.clone();
        let nw_proxy = self.proxy.clone();

        let mut builder = WebViewBuilder::new()
            .with_url(url)
            .with_bounds(self.host.content_bounds())
            .with_devtools(cfg!(debug_assertions))
            // Also sees iframes and redirect hops, so it only filters.
            .with_navigation_handler(move |nav_url| {
                if ad_filter && should_block(&nav_url) {
                    let _ = nav_proxy.send_event(UserEvent::Engine(EngineEvent::RequestBlocked {
                        tab_id: nav_tab.clone(),
                        url: nav_url,
                    }));
                    return false;
                }
                true
            })
            .with_on_page_load_handler(move |event, page_url| {
                let changed = page_seen.lock().map(|mut seen| seen.changed_to(&page_url)).unwrap_or(false);
                if changed {
                    let _ = load_proxy.send_event(UserEvent::Engine(EngineEvent::UrlChanged {
                        tab_id: load_tab.clone(),
                        url: page_url,
                    }));
                }
                if let PageLoadEvent::Finished = event {
                    let _ = load_proxy.send_event(UserEvent::Engine(EngineEvent::LoadFinished {
                        tab_id: load_tab.clone(),
                    }));
                }
            })
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(UserEvent::Engine(EngineEvent::TitleChanged {
                    tab_id: title_tab.clone(),
                    title,
                }));
            })
            .with_download_started_handler(move |dl_url, path| {
                let filename = suggested_filename(&dl_url, Some(path.as_path()));
                *path = destination_for(&dl_dir, &filename);
                let _ = dl_proxy.send_event(UserEvent::Engine(EngineEvent::DownloadRequested {
                    tab_id: dl_tab.clone(),
                    url: dl_url,
                    filepath: path.display().to_string(),
                }));
                true
            })
            .with_download_completed_handler(move |dl_url, path, success| {
                let _ = done_proxy.send_event(UserEvent::Engine(EngineEvent::DownloadFinished {
                    url: dl_url,
                    filepath: path.map(|p| p.display().to_string()),
                    success,
                }));
            })
            .with_new_window_req_handler(move |nw_url, _features| {
                debug!("[NW] {}", nw_url);
                if nw_url.starts_with("http://") || nw_url.starts_with("https://") {
                    let _ = nw_proxy.send_event(UserEvent::OpenInNewTab(nw_url));
                }
                wry::NewWindowResponse::Deny
            });

        if ad_filter {
            builder = builder.with_initialization_script(self.filter_script.as_str());
        }

        self.host.build(builder)
    }
}

fn settings_payload(settings: &BrowserSettings) -> serde_json::Value {
    let engines: Vec<&str> = SearchEngine::ALL.iter().map(|e| e.display_name()).collect();
    serde_json::json!({"settings": settings, "engines": engines})
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let paths = AppPaths::platform_default();
    info!(
        data = %paths.user_data_file.display(),
        downloads = %paths.downloads_dir.display(),
        "resolved paths"
    );
    let mut app = App::new(paths, BrowserSettings::default());
    let downloads_dir = app.download_manager.get_downloads_dir().to_path_buf();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Tabbrowser")
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;
    let host = Host::new(window)?;

    let ipc_proxy = proxy.clone();
    let chrome_builder = WebViewBuilder::new()
        .with_html(chrome_html())
        .with_bounds(host.chrome_bounds())
        .with_devtools(cfg!(debug_assertions))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            match parse_message(body) {
                Ok(message) => {
                    let _ = ipc_proxy.send_event(UserEvent::Chrome(message));
                }
                Err(e) => {
                    let preview: String = body.chars().take(200).collect();
                    warn!("Ignoring chrome message {}: {}", preview, e);
                }
            }
        });
    let chrome = host.build(chrome_builder)?;

    let mut shell = Shell {
        host,
        chrome,
        tabs: HashMap::new(),
        proxy,
        downloads_dir,
        filter_script: app.request_filter.content_script(),
    };
    let startup = app.startup();
    shell.apply_all(startup);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                app.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => shell.layout(),

            Event::UserEvent(user_event) => {
                let commands = match user_event {
                    UserEvent::Chrome(message) => handle_message(&mut app, message),
                    UserEvent::Engine(engine_event) => app.handle_event(engine_event),
                    UserEvent::OpenInNewTab(url) => app.new_tab(Some(&url), None),
                };
                shell.apply_all(commands);
            }

            _ => {}
        }
    });
}
