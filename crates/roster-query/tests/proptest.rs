//! Property-based tests for roster-query using proptest.

use proptest::prelude::*;
use std::cmp::Ordering;

use roster_query::{
    compare_values, compose_filter_query, FieldKind, FieldRegistry, ListMode, ListState, Number,
    PageWindow, Predicate, SortOrder, SortRule, Sortable, Sorter, Value,
};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: usize,
    name: String,
    score: Option<i64>,
    active: bool,
}

impl Sortable for Row {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "score" => self
                .score
                .map_or(Value::None, |s| Value::Number(Number::I64(s))),
            "active" => Value::Bool(self.active),
            _ => Value::None,
        }
    }
}

fn sorter() -> Sorter {
    Sorter::new(
        FieldRegistry::new()
            .string("name")
            .number("score")
            .bool("active"),
    )
}

// Small alphabets so that ties are common
fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        ("[ab]{1,2}", prop::option::of(0i64..4), any::<bool>()),
        0..40,
    )
    .prop_map(|tuples| {
        tuples
            .into_iter()
            .enumerate()
            .map(|(id, (name, score, active))| Row {
                id,
                name,
                score,
                active,
            })
            .collect()
    })
}

fn rule_strategy() -> impl Strategy<Value = SortRule> {
    (
        prop::sample::select(vec!["name", "score", "active"]),
        any::<bool>(),
    )
        .prop_map(|(field, asc)| {
            SortRule::new(field, if asc { SortOrder::Asc } else { SortOrder::Desc })
        })
}

fn predicate_strategy() -> impl Strategy<Value = Option<Predicate>> {
    prop::option::of(
        ("[a-z]{1,8}", "[a-z]{1,8}").prop_map(|(field, value)| Predicate::contains(field, value)),
    )
}

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    id: usize,
    amount: Option<Number>,
}

impl Sortable for Reading {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "amount" => self.amount.into(),
            _ => Value::None,
        }
    }
}

// Mixes NaN, integers beyond f64 precision and floats near them
fn number_strategy() -> impl Strategy<Value = Number> {
    let near = 9_007_199_254_740_992u64;
    prop_oneof![
        Just(Number::F64(f64::NAN)),
        any::<i64>().prop_map(Number::I64),
        any::<u64>().prop_map(Number::U64),
        (near - 4..near + 4).prop_map(Number::U64),
        (-4i64..4).prop_map(|d| Number::I64(i64::MAX - 4 + d.abs())),
        Just(Number::U64(i64::MAX as u64 + 1)),
        prop::sample::select(vec![
            9_007_199_254_740_992.0,
            9_223_372_036_854_775_808.0,
            -0.0,
            1.5,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ])
        .prop_map(Number::F64),
        any::<f64>().prop_map(Number::F64),
    ]
}

fn readings_strategy() -> impl Strategy<Value = Vec<Reading>> {
    prop::collection::vec(prop::option::of(number_strategy()), 0..60).prop_map(|amounts| {
        amounts
            .into_iter()
            .enumerate()
            .map(|(id, amount)| Reading { id, amount })
            .collect()
    })
}

fn equal_under(a: &Row, b: &Row, rules: &[SortRule]) -> bool {
    rules
        .iter()
        .all(|rule| a.field_value(&rule.field) == b.field_value(&rule.field))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Sorting an already sorted sequence changes nothing.
    #[test]
    fn sort_is_idempotent(
        rows in rows_strategy(),
        rules in prop::collection::vec(rule_strategy(), 0..4),
    ) {
        let once = sorter().sort_records(&rows, &rules).unwrap();
        let twice = sorter().sort_records(&once, &rules).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Rows equal under every rule keep their input order.
    #[test]
    fn sort_is_stable(
        rows in rows_strategy(),
        rules in prop::collection::vec(rule_strategy(), 1..4),
    ) {
        let sorted = sorter().sort_records(&rows, &rules).unwrap();

        for (i, a) in sorted.iter().enumerate() {
            for b in &sorted[i + 1..] {
                if equal_under(a, b, &rules) {
                    prop_assert!(a.id < b.id);
                }
            }
        }
    }

    /// Sorting is a permutation of the input.
    #[test]
    fn sort_preserves_elements(
        rows in rows_strategy(),
        rules in prop::collection::vec(rule_strategy(), 0..4),
    ) {
        let sorted = sorter().sort_records(&rows, &rules).unwrap();
        let mut ids: Vec<usize> = sorted.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        let expected: Vec<usize> = (0..rows.len()).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Numeric sorts come out ordered even with NaN and wide integers mixed in.
    #[test]
    fn numeric_sort_is_ordered(
        readings in readings_strategy(),
        asc in any::<bool>(),
    ) {
        let sorter = Sorter::new(FieldRegistry::new().number("amount"));
        let order = if asc { SortOrder::Asc } else { SortOrder::Desc };
        let rules = [SortRule::new("amount", order)];

        let sorted = sorter.sort_records(&readings, &rules).unwrap();
        for pair in sorted.windows(2) {
            let ord = compare_values(
                FieldKind::Number,
                &pair[0].field_value("amount"),
                &pair[1].field_value("amount"),
            );
            prop_assert_ne!(order.apply(ord), Ordering::Greater);
        }

        let twice = sorter.sort_records(&sorted, &rules).unwrap();
        let ids = |rows: &[Reading]| rows.iter().map(|r| r.id).collect::<Vec<_>>();
        prop_assert_eq!(ids(&sorted), ids(&twice));
    }

    /// N non-null predicates yield exactly N-1 commas.
    #[test]
    fn composed_filter_comma_count(
        slots in prop::collection::vec(predicate_strategy(), 0..8),
    ) {
        let present = slots.iter().filter(|slot| slot.is_some()).count();
        let composed = compose_filter_query(slots.clone());
        let commas = composed.matches(',').count();

        if present == 0 {
            prop_assert_eq!(composed, "");
        } else {
            prop_assert_eq!(commas, present - 1);
        }
    }

    /// Consecutive sort requests always alternate direction.
    #[test]
    fn toggle_always_alternates(
        fields in prop::collection::vec(prop::sample::select(vec!["name", "score", "active"]), 1..10),
    ) {
        let mut state = ListState::default();
        let mut previous: Option<SortOrder> = None;

        for field in fields {
            let rule = state.toggle_sort(field);
            prop_assert_eq!(rule.field.as_str(), field);
            if let Some(prev) = previous {
                prop_assert_eq!(rule.order, prev.flipped());
            }
            previous = Some(rule.order);
        }
    }

    /// Resetting pagination ignores any prior window.
    #[test]
    fn reset_ignores_prior_state(
        first in any::<i64>(),
        rows in any::<i64>(),
        page_size in 1u64..100,
    ) {
        let mut state = ListState::new(ListMode::Lazy, page_size);
        state.set_pagination(Some(&(first, rows)));
        state.set_pagination(None);
        prop_assert_eq!(state.window(), PageWindow::first(page_size));
    }

    /// A page window never covers more than `take` items.
    #[test]
    fn window_slice_bounded(
        len in 0usize..200,
        skip in 0u64..300,
        take in 1u64..50,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let window = PageWindow::new(skip, take);
        let slice = window.slice(&items);
        prop_assert!(slice.len() as u64 <= take);
        if let Some(first) = slice.first() {
            prop_assert_eq!(*first as u64, skip);
        }
    }
}
