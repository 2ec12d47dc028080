//! Property-based tests for Tab Manager operations.
//!
//! For any sequence of opens, closes and switches, the tab count tracks the
//! operations, never drops below one once a tab exists, and there is always
//! exactly one active tab that belongs to the list.

use tabbrowser::managers::tab_manager::{TabManager, TabManagerTrait};
use proptest::prelude::*;

/// Operations that can be performed on the TabManager.
#[derive(Debug, Clone)]
enum TabOp {
    Open,
    Close(usize), // taken modulo the current tab count
    Switch(usize),
}

/// Biased toward opens to keep interesting state.
fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Open),
            2 => (0..20usize).prop_map(TabOp::Close),
            1 => (0..20usize).prop_map(TabOp::Switch),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn tab_count_invariant(ops in arb_tab_ops()) {
        let mut manager = TabManager::new();
        manager.add_tab("https://home.example", Some("home"), true);
        let mut expected_count: usize = 1;

        for op in &ops {
            match op {
                TabOp::Open => {
                    manager.add_tab("https://example.com", None, true);
                    expected_count += 1;
                }
                TabOp::Close(idx) => {
                    let pick = idx % manager.tab_count();
                    let closed = manager.close_tab(pick).unwrap();
                    if expected_count == 1 {
                        prop_assert!(!closed, "closing the only tab must be refused");
                    } else {
                        prop_assert!(closed);
                        expected_count -= 1;
                    }
                }
                TabOp::Switch(idx) => {
                    let pick = idx % manager.tab_count();
                    manager.switch_tab(pick).unwrap();
                    prop_assert_eq!(manager.index_of(&manager.current_tab().unwrap().id), Some(pick));
                }
            }

            prop_assert_eq!(
                manager.tab_count(),
                expected_count,
                "After {:?}, expected {} tabs but got {}",
                op,
                expected_count,
                manager.tab_count()
            );
            prop_assert!(manager.tab_count() >= 1);

            let active = manager.current_tab();
            prop_assert!(active.is_some(), "there must always be an active tab");
            let active_id = &active.unwrap().id;
            prop_assert_eq!(
                manager.get_all_tabs().iter().filter(|t| &t.id == active_id).count(),
                1
            );
        }
    }

    #[test]
    fn closing_active_tab_activates_same_position_or_last(n in 2..10usize, pick in 0..10usize) {
        let mut manager = TabManager::new();
        for i in 0..n {
            manager.add_tab(&format!("https://{}.example", i), None, true);
        }
        let pick = pick % n;
        manager.switch_tab(pick).unwrap();
        let expected_url = if pick == n - 1 {
            format!("https://{}.example", n - 2)
        } else {
            format!("https://{}.example", pick + 1)
        };

        manager.close_tab(pick).unwrap();
        prop_assert_eq!(&manager.current_tab().unwrap().url, &expected_url);
    }
}
