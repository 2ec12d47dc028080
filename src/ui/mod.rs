//! Tabbrowser UI layer.
//!
//! Uses `wry` for the system webview:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The browser chrome is rendered as HTML/CSS/JS in its own webview; page
//! content lives in one child webview per tab. Chrome and backend talk over
//! wry IPC.

pub mod webview_app;
