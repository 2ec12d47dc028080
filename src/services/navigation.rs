//! Address-bar input classification.
//!
//! Text containing a space, or no `.` at all, is a search query. Anything
//! else is a URL and gets `http://` prepended unless it already starts with
//! `http`. The heuristic misclassifies dotless hostnames and dotted queries;
//! that is accepted.

use crate::types::settings::SearchEngine;

/// What the address-bar text was taken to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Search(String),
    Url(String),
}

impl NavigationTarget {
    /// The URL to load for this target.
    pub fn into_url(self) -> String {
        match self {
            NavigationTarget::Search(url) | NavigationTarget::Url(url) => url,
        }
    }
}

/// Returns true when the input should be sent to the search engine.
pub fn is_search_query(input: &str) -> bool {
    input.contains(' ') || !input.contains('.')
}

/// Resolves raw address-bar text into the URL to load.
pub fn resolve_input(input: &str, engine: SearchEngine) -> NavigationTarget {
    if is_search_query(input) {
        NavigationTarget::Search(format!("{}{}", engine.query_template(), input))
    } else if input.starts_with("http") {
        NavigationTarget::Url(input.to_string())
    } else {
        NavigationTarget::Url(format!("http://{}", input))
    }
}

/// The last page URL a tab's engine reported, used to drop repeats.
///
/// The engine reports the page URL when a load starts and again when it
/// finishes; only a different URL counts as a change.
#[derive(Debug, Default)]
pub struct PageUrl {
    last: Option<String>,
}

impl PageUrl {
    /// Remembers `url` and returns whether it differs from the previous one.
    /// Empty URLs are ignored.
    pub fn changed_to(&mut self, url: &str) -> bool {
        if url.is_empty() || self.last.as_deref() == Some(url) {
            return false;
        }
        self.last = Some(url.to_string());
        true
    }
}
