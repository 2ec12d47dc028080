//! Property-based tests for the keyword request filter.

use proptest::prelude::*;
use tabbrowser::services::request_filter::{should_block, AD_KEYWORDS};

fn arb_keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(AD_KEYWORDS.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn blocked_iff_keyword_present(url in "[a-zA-Z0-9:/._?=-]{0,60}") {
        let expected = AD_KEYWORDS.iter().any(|k| url.contains(k));
        prop_assert_eq!(should_block(&url), expected);
    }

    #[test]
    fn any_url_with_keyword_is_blocked(
        prefix in "[a-z0-9:/.]{0,20}",
        keyword in arb_keyword(),
        suffix in "[a-z0-9/.]{0,20}",
    ) {
        let url = format!("{}{}{}", prefix, keyword, suffix);
        prop_assert!(should_block(&url));
    }

    // Without 'a' and 'd' no keyword can appear.
    #[test]
    fn urls_without_keyword_letters_pass(url in "[b-ce-zB-Z0-9:/._?=-]{0,60}") {
        prop_assert!(!should_block(&url));
    }
}
