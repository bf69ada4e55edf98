// Property-based tests for the event store
// Random sequences of create/rename/delete checked against simple invariants

use chrono::NaiveDate;
use month_calendar::models::event::EventId;
use month_calendar::services::event::EventStore;
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Create(u32, String),
    Rename(EventId, String),
    Delete(EventId),
}

fn day(offset: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() + chrono::Duration::days(i64::from(offset))
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..10u32, "[ a-z]{0,8}").prop_map(|(offset, title)| Op::Create(offset, title)),
        (1..20i64, "[ a-z]{0,8}").prop_map(|(id, title)| Op::Rename(id, title)),
        (1..20i64).prop_map(Op::Delete),
    ]
}

proptest! {
    /// Property: stored titles are always trimmed and non-empty, ids unique
    #[test]
    fn prop_store_invariants_hold(ops in prop::collection::vec(any_op(), 0..60)) {
        let mut store = EventStore::new();
        let mut ever_issued = HashSet::new();

        for op in ops {
            match op {
                Op::Create(offset, title) => {
                    let before = store.len();
                    match store.create(day(offset), &title) {
                        Ok(event) => {
                            prop_assert!(ever_issued.insert(event.id));
                            prop_assert_eq!(store.len(), before + 1);
                            prop_assert!(store.events_on(day(offset)).contains(&&event));
                        }
                        Err(_) => {
                            prop_assert!(title.trim().is_empty());
                            prop_assert_eq!(store.len(), before);
                        }
                    }
                }
                Op::Rename(id, title) => {
                    let before = store.get(id).cloned();
                    store.rename(id, &title);
                    if let (Some(before), Some(after)) = (before, store.get(id)) {
                        prop_assert_eq!(before.id, after.id);
                        prop_assert_eq!(before.date, after.date);
                        prop_assert_eq!(before.color, after.color);
                    }
                }
                Op::Delete(id) => {
                    store.delete(id);
                    prop_assert!(store.get(id).is_none());
                    prop_assert!(store.delete(id).is_none());
                }
            }

            for event in store.iter() {
                prop_assert_eq!(event.title.trim(), event.title.as_str());
                prop_assert!(!event.title.is_empty());
            }
        }

        // Per-day queries partition the whole store
        let total: usize = (0..10).map(|offset| store.events_on(day(offset)).len()).sum();
        prop_assert_eq!(total, store.len());
    }
}
