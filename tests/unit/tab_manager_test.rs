use tabbrowser::managers::tab_manager::{label_for_title, TabManager, TabManagerTrait, TAB_LABEL_MAX_CHARS};
use tabbrowser::types::errors::TabError;
use tabbrowser::types::tab::DEFAULT_TAB_LABEL;

fn manager_with(urls: &[&str]) -> TabManager {
    let mut mgr = TabManager::new();
    for url in urls {
        mgr.add_tab(url, None, true);
    }
    mgr
}

#[test]
fn test_add_tab_returns_index_and_activates() {
    let mut mgr = TabManager::new();
    assert_eq!(mgr.add_tab("https://a.example", None, true), 0);
    assert_eq!(mgr.add_tab("https://b.example", None, false), 1);
    assert_eq!(mgr.current_tab().unwrap().url, "https://b.example");
}

#[test]
fn test_add_tab_ids_are_unique() {
    let mgr = manager_with(&["https://a.example", "https://a.example"]);
    let tabs = mgr.get_all_tabs();
    assert_ne!(tabs[0].id, tabs[1].id);
}

#[test]
fn test_add_tab_label_defaults() {
    let mut mgr = TabManager::new();
    mgr.add_tab("https://a.example", None, true);
    mgr.add_tab("https://b.example", Some("home"), true);
    assert_eq!(mgr.get_tab(0).unwrap().label, DEFAULT_TAB_LABEL);
    assert_eq!(mgr.get_tab(1).unwrap().label, "home");
}

#[test]
fn test_add_tab_records_ad_filter_flag() {
    let mut mgr = TabManager::new();
    mgr.add_tab("https://a.example", None, true);
    mgr.add_tab("https://b.example", None, false);
    assert!(mgr.get_tab(0).unwrap().ad_filter);
    assert!(!mgr.get_tab(1).unwrap().ad_filter);
}

#[test]
fn test_close_only_tab_is_ignored() {
    let mut mgr = manager_with(&["https://a.example"]);
    assert!(!mgr.close_tab(0).unwrap());
    assert_eq!(mgr.tab_count(), 1);
}

#[test]
fn test_close_active_middle_tab_activates_next() {
    let mut mgr = manager_with(&["https://a.example", "https://b.example", "https://c.example"]);
    mgr.switch_tab(1).unwrap();

    assert!(mgr.close_tab(1).unwrap());
    assert_eq!(mgr.tab_count(), 2);
    assert_eq!(mgr.current_tab().unwrap().url, "https://c.example");
}

#[test]
fn test_close_active_last_tab_activates_new_last() {
    let mut mgr = manager_with(&["https://a.example", "https://b.example", "https://c.example"]);

    assert!(mgr.close_tab(2).unwrap());
    assert_eq!(mgr.current_tab().unwrap().url, "https://b.example");
}

#[test]
fn test_close_inactive_tab_keeps_active() {
    let mut mgr = manager_with(&["https://a.example", "https://b.example", "https://c.example"]);
    mgr.switch_tab(2).unwrap();

    mgr.close_tab(0).unwrap();
    assert_eq!(mgr.current_tab().unwrap().url, "https://c.example");
    assert_eq!(mgr.index_of(&mgr.current_tab().unwrap().id), Some(1));
}

#[test]
fn test_close_out_of_range_is_error() {
    let mut mgr = manager_with(&["https://a.example", "https://b.example"]);
    assert!(matches!(mgr.close_tab(5), Err(TabError::InvalidIndex(5))));
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_switch_tab_out_of_range_is_error() {
    let mut mgr = manager_with(&["https://a.example"]);
    assert!(matches!(mgr.switch_tab(1), Err(TabError::InvalidIndex(1))));
    assert_eq!(mgr.current_tab().unwrap().url, "https://a.example");
}

#[test]
fn test_update_url_and_title_by_id() {
    let mut mgr = manager_with(&["https://a.example"]);
    let id = mgr.get_tab(0).unwrap().id.clone();

    mgr.update_tab_url(&id, "https://a.example/page").unwrap();
    mgr.update_page_title(&id, "Page").unwrap();
    let tab = mgr.find_by_id(&id).unwrap();
    assert_eq!(tab.url, "https://a.example/page");
    assert_eq!(tab.page_title, "Page");
}

#[test]
fn test_new_url_forgets_previous_title() {
    let mut mgr = manager_with(&["https://a.example"]);
    let id = mgr.get_tab(0).unwrap().id.clone();
    mgr.update_page_title(&id, "Alpha").unwrap();

    mgr.update_tab_url(&id, "https://a.example").unwrap();
    assert_eq!(mgr.find_by_id(&id).unwrap().page_title, "Alpha", "same URL keeps the title");

    mgr.update_tab_url(&id, "https://b.example").unwrap();
    assert_eq!(mgr.find_by_id(&id).unwrap().page_title, "");
}

#[test]
fn test_updates_for_unknown_tab_fail() {
    let mut mgr = manager_with(&["https://a.example"]);
    assert!(matches!(mgr.update_tab_url("gone", "x"), Err(TabError::NotFound(_))));
    assert!(matches!(mgr.set_tab_label("gone", "x"), Err(TabError::NotFound(_))));
    assert_eq!(mgr.index_of("gone"), None);
}

#[test]
fn test_label_short_title_is_unchanged() {
    assert_eq!(label_for_title("Example"), "Example");
}

#[test]
fn test_label_long_title_is_truncated_with_ellipsis() {
    let label = label_for_title("The Rust Programming Language");
    assert_eq!(label, "The Rust Progra...");
    assert_eq!(label.chars().count(), TAB_LABEL_MAX_CHARS + 3);
}
