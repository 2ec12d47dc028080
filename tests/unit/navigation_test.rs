//! Unit tests for address-bar classification.

use rstest::rstest;
use tabbrowser::services::navigation::{is_search_query, resolve_input, NavigationTarget, PageUrl};
use tabbrowser::types::settings::SearchEngine;

#[rstest]
#[case("rust programming", true)]
#[case("localhost", true)]
#[case("hello", true)]
#[case("example.com", false)]
#[case("https://example.com", false)]
#[case("what is example.com", true)]
#[case("", true)]
fn test_is_search_query(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_search_query(input), expected, "input={input:?}");
}

#[test]
fn test_search_appends_raw_text() {
    let target = resolve_input("rust programming", SearchEngine::Google);
    assert_eq!(
        target,
        NavigationTarget::Search("https://www.google.com/search?q=rust programming".to_string())
    );
}

#[test]
fn test_bare_host_gets_http_prefix() {
    let target = resolve_input("example.com", SearchEngine::Google);
    assert_eq!(target, NavigationTarget::Url("http://example.com".to_string()));
}

#[rstest]
#[case("https://example.com")]
#[case("http://example.com/path?q=1")]
#[case("httpbin.org")]
fn test_http_prefixed_input_is_unchanged(#[case] input: &str) {
    assert_eq!(resolve_input(input, SearchEngine::Bing).into_url(), input);
}

#[rstest]
#[case(SearchEngine::Google, "https://www.google.com/search?q=cats")]
#[case(SearchEngine::Bing, "https://www.bing.com/search?q=cats")]
#[case(SearchEngine::DuckDuckGo, "https://duckduckgo.com/?q=cats")]
fn test_search_uses_selected_engine(#[case] engine: SearchEngine, #[case] expected: &str) {
    assert_eq!(resolve_input("cats", engine).into_url(), expected);
}

#[test]
fn test_page_url_reports_each_committed_change_once() {
    let mut page = PageUrl::default();
    assert!(!page.changed_to(""));
    assert!(page.changed_to("https://a.example/"));
    // Started and Finished both carry the committed URL.
    assert!(!page.changed_to("https://a.example/"));
    assert!(page.changed_to("https://b.example/"));
    assert!(page.changed_to("https://a.example/"));
    assert!(!page.changed_to(""));
    assert!(!page.changed_to("https://a.example/"));
}
