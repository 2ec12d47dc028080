//! Property-based tests for address-bar classification.
//!
//! Input with a space or without a dot is a search; the resulting URL is the
//! engine's query template followed by the raw text. Everything else is a
//! URL that starts with `http`.

use proptest::prelude::*;
use tabbrowser::services::navigation::{resolve_input, NavigationTarget};
use tabbrowser::types::settings::SearchEngine;

fn arb_engine() -> impl Strategy<Value = SearchEngine> {
    prop_oneof![
        Just(SearchEngine::Google),
        Just(SearchEngine::Bing),
        Just(SearchEngine::DuckDuckGo),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn classification_matches_space_and_dot_rule(input in "[a-z .:/]{0,30}", engine in arb_engine()) {
        let target = resolve_input(&input, engine);
        let is_search = input.contains(' ') || !input.contains('.');
        match target {
            NavigationTarget::Search(url) => {
                prop_assert!(is_search);
                prop_assert_eq!(url, format!("{}{}", engine.query_template(), input));
            }
            NavigationTarget::Url(url) => {
                prop_assert!(!is_search);
                prop_assert!(url.starts_with("http"));
                prop_assert!(url.ends_with(&input));
            }
        }
    }

    #[test]
    fn dotted_words_become_http_urls(host in "[a-z]{1,12}\\.[a-z]{2,6}") {
        let url = resolve_input(&host, SearchEngine::Google).into_url();
        prop_assert_eq!(url, format!("http://{}", host));
    }

    #[test]
    fn input_with_space_is_always_search(a in "[a-z.]{0,10}", b in "[a-z.]{0,10}", engine in arb_engine()) {
        let input = format!("{} {}", a, b);
        let is_search = matches!(resolve_input(&input, engine), NavigationTarget::Search(_));
        prop_assert!(is_search);
    }
}
