//! Tabbrowser, a small tabbed web browser.
//!
//! Entry point: opens the browser window.
//! When built without the `gui` feature, runs a console demo of the controller.

use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    if let Err(e) = tabbrowser::ui::webview_app::run() {
        tracing::error!("Browser failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    println!();
    println!("Tabbrowser v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let dir = std::env::temp_dir().join(format!("tabbrowser-demo-{}", std::process::id()));
    demo_navigation();
    demo_request_filter();
    demo_app(&dir);
    if let Err(e) = std::fs::remove_dir_all(&dir) {
        tracing::warn!(dir = %dir.display(), "Failed to remove demo directory: {}", e);
    }

    println!();
    println!("  All components demonstrated.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_navigation() {
    use tabbrowser::services::navigation::resolve_input;
    use tabbrowser::types::settings::SearchEngine;
    section("Address bar");

    for input in ["rust-lang.org", "https://crates.io", "rust borrow checker", "localhost"] {
        println!("  {:<24} -> {:?}", input, resolve_input(input, SearchEngine::DuckDuckGo));
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_request_filter() {
    use tabbrowser::services::request_filter::should_block;
    section("Request filter");

    for url in ["https://example.com/index.html", "https://ads.example.com/banner.js", "https://doubleclick.net/x"] {
        println!("  {:<36} blocked={}", url, should_block(url));
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app(dir: &std::path::Path) {
    use tabbrowser::app::App;
    use tabbrowser::platform::AppPaths;
    use tabbrowser::types::event::EngineEvent;
    use tabbrowser::types::settings::BrowserSettings;
    section("Controller (simulated engine)");

    let mut app = App::new(AppPaths::rooted_at(dir), BrowserSettings::default());
    for command in app.startup() {
        println!("  > {:?}", command);
    }

    let Some((tab_id, _)) = app.current_tab_snapshot() else {
        return;
    };
    let events = vec![
        EngineEvent::UrlChanged { tab_id: tab_id.clone(), url: "https://www.rust-lang.org/".to_string() },
        EngineEvent::TitleChanged {
            tab_id: tab_id.clone(),
            title: "Rust Programming Language".to_string(),
        },
        EngineEvent::LoadFinished { tab_id: tab_id.clone() },
    ];
    for event in events {
        for command in app.handle_event(event) {
            println!("  > {:?}", command);
        }
    }

    app.add_bookmark();
    app.new_tab(Some("https://docs.rs"), None);
    println!("  Tabs: {}", app.tab_summaries().len());
    println!("  Bookmarks: {:?}", app.bookmarks());
    println!("  History: {:?}", app.history());
    println!("  Data file: {}", dir.join("user_data.json").display());
    app.shutdown();
    println!();
}
