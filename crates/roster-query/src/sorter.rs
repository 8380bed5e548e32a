//! Stable multi-key sorting.
//!
//! The [`Sorter`] orders records by an ordered list of [`SortRule`]s. The
//! first rule is the primary key; later rules only break ties. Records that
//! compare equal under every rule keep their input order.

use std::cmp::Ordering;

use crate::error::Result;
use crate::ordering::{compare_values, SortRule};
use crate::registry::{FieldKind, FieldRegistry};
use crate::traits::Sortable;
use crate::value::Value;

/// Stable multi-key sorter bound to a comparator registry.
///
/// # Example
///
/// ```
/// use roster_query::{FieldRegistry, Number, SortRule, Sorter, Value};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Row {
///     name: &'static str,
///     created_on: i64,
/// }
///
/// fn accessor<'a>(row: &'a Row, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(row.name),
///         "createdOn" => Value::Number(Number::I64(row.created_on)),
///         _ => Value::None,
///     }
/// }
///
/// let sorter = Sorter::new(FieldRegistry::new().string("name").number("createdOn"));
/// let rows = vec![
///     Row { name: "b", created_on: 1 },
///     Row { name: "a", created_on: 2 },
///     Row { name: "a", created_on: 1 },
/// ];
///
/// let sorted = sorter
///     .sort(&rows, &[SortRule::asc("name"), SortRule::desc("createdOn")], accessor)
///     .unwrap();
/// assert_eq!(sorted[0], Row { name: "a", created_on: 2 });
/// assert_eq!(sorted[2], Row { name: "b", created_on: 1 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sorter {
    registry: FieldRegistry,
}

impl Sorter {
    /// Creates a sorter for the given registry.
    pub fn new(registry: FieldRegistry) -> Self {
        Sorter { registry }
    }

    /// Returns the comparator registry.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Returns a new sequence ordered by `rules`.
    ///
    /// The input is left untouched. Fails if a rule names a field that is
    /// not registered.
    pub fn sort<T, F>(&self, records: &[T], rules: &[SortRule], accessor: F) -> Result<Vec<T>>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        Ok(self
            .sort_refs(records, rules, accessor)?
            .into_iter()
            .cloned()
            .collect())
    }

    /// Like [`sort`](Self::sort), but returns references into `records`.
    pub fn sort_refs<'r, T, F>(
        &self,
        records: &'r [T],
        rules: &[SortRule],
        accessor: F,
    ) -> Result<Vec<&'r T>>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let kinds = self.registry.resolve(rules)?;
        let mut sorted: Vec<&'r T> = records.iter().collect();

        if !rules.is_empty() {
            // slice::sort_by is stable
            sorted.sort_by(|a, b| compare_by_rules(*a, *b, rules, &kinds, &accessor));
        }

        Ok(sorted)
    }

    /// Sorts records that expose their fields through [`Sortable`].
    pub fn sort_records<T>(&self, records: &[T], rules: &[SortRule]) -> Result<Vec<T>>
    where
        T: Sortable + Clone,
    {
        self.sort(records, rules, T::accessor)
    }
}

/// Compares two records rule by rule.
///
/// `kinds[i]` is the comparator kind of `rules[i]`.
fn compare_by_rules<T, F>(
    a: &T,
    b: &T,
    rules: &[SortRule],
    kinds: &[FieldKind],
    accessor: &F,
) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    for (rule, kind) in rules.iter().zip(kinds) {
        let val_a = accessor(a, &rule.field);
        let val_b = accessor(b, &rule.field);

        let ordering = rule.order.apply(compare_values(*kind, &val_a, &val_b));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;
    use crate::value::{Number, Timestamp};

    #[derive(Debug, Clone, PartialEq)]
    struct Role {
        id: i64,
        name: String,
        is_default: bool,
        created_at: Option<i64>,
    }

    impl Sortable for Role {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "id" => Value::Number(Number::I64(self.id)),
                "name" => Value::String(&self.name),
                "isDefault" => Value::Bool(self.is_default),
                "createdAt" => self
                    .created_at
                    .map_or(Value::None, |ms| Value::Timestamp(Timestamp(ms))),
                _ => Value::None,
            }
        }
    }

    fn role(id: i64, name: &str, is_default: bool, created_at: Option<i64>) -> Role {
        Role {
            id,
            name: name.to_string(),
            is_default,
            created_at,
        }
    }

    fn sorter() -> Sorter {
        Sorter::new(
            FieldRegistry::new()
                .number("id")
                .string("name")
                .bool("isDefault")
                .timestamp("createdAt"),
        )
    }

    fn ids(roles: &[Role]) -> Vec<i64> {
        roles.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_rules_keep_input_order() {
        let roles = vec![role(2, "b", false, None), role(1, "a", false, None)];
        let sorted = sorter().sort_records(&roles, &[]).unwrap();
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn default_role_ordering() {
        let roles = vec![
            role(1, "viewer", false, Some(1000)),
            role(2, "admin", true, Some(3000)),
            role(3, "editor", false, Some(3000)),
            role(4, "owner", true, Some(2000)),
        ];

        let sorted = sorter()
            .sort_records(
                &roles,
                &[SortRule::desc("createdAt"), SortRule::desc("isDefault")],
            )
            .unwrap();

        // createdAt 3000 tie broken by isDefault desc
        assert_eq!(ids(&sorted), vec![2, 3, 4, 1]);
    }

    #[test]
    fn stable_for_equal_keys() {
        let roles = vec![
            role(1, "same", false, None),
            role(2, "same", false, None),
            role(3, "same", false, None),
        ];
        let sorted = sorter()
            .sort_records(&roles, &[SortRule::desc("name")])
            .unwrap();
        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn nulls_last_ascending_first_descending() {
        let roles = vec![
            role(1, "a", false, None),
            role(2, "b", false, Some(5)),
            role(3, "c", false, Some(1)),
        ];

        let asc = sorter()
            .sort_records(&roles, &[SortRule::asc("createdAt")])
            .unwrap();
        assert_eq!(ids(&asc), vec![3, 2, 1]);

        let desc = sorter()
            .sort_records(&roles, &[SortRule::desc("createdAt")])
            .unwrap();
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn input_is_not_mutated() {
        let roles = vec![role(2, "b", false, None), role(1, "a", false, None)];
        let before = roles.clone();
        let _ = sorter().sort_records(&roles, &[SortRule::asc("id")]).unwrap();
        assert_eq!(roles, before);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let roles = vec![role(1, "a", false, None)];
        let err = sorter()
            .sort_records(&roles, &[SortRule::asc("email")])
            .unwrap_err();
        assert_eq!(err, SortError::UnknownField("email".to_string()));
    }

    #[test]
    fn sort_refs_borrow_input() {
        let roles = vec![role(2, "b", false, None), role(1, "a", false, None)];
        let sorted = sorter()
            .sort_refs(&roles, &[SortRule::asc("name")], Role::accessor)
            .unwrap();
        assert!(std::ptr::eq(sorted[0], &roles[1]));
    }
}
