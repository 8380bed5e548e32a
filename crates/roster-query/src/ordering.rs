//! Sort direction and sort rules.
//!
//! Provides [`SortOrder`] for direction and [`SortRule`] for a single
//! (field, direction) pair within a list of tie-breaking rules.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registry::FieldKind;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Returns the wire name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sort rule: a field and a direction.
///
/// Displays in the `orderBy` wire form `field:asc` / `field:desc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortRule {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub order: SortOrder,
}

impl SortRule {
    /// Creates a rule with the given direction.
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        SortRule {
            field: field.into(),
            order,
        }
    }

    /// Creates an ascending rule for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    /// Creates a descending rule for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Desc)
    }
}

impl fmt::Display for SortRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.order)
    }
}

/// Compares two values under the comparator of a registered field kind.
///
/// Values whose runtime type does not match `kind` are treated as absent.
/// Absent values sort after present ones; the caller's direction is applied
/// on top, which puts them first in descending order. NaN counts as absent.
pub fn compare_values(kind: FieldKind, a: &Value<'_>, b: &Value<'_>) -> Ordering {
    let a = kind.admit(a);
    let b = kind.admit(b);

    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        // admit() has already turned NaN into None
        (Value::Number(a), Value::Number(b)) => a.compare(b).unwrap_or(Ordering::Equal),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(&b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(&b),

        (Value::None, Value::None) => Ordering::Equal,
        (Value::None, _) => Ordering::Greater,
        (_, Value::None) => Ordering::Less,

        // admit() guarantees both sides share the registered kind
        _ => Ordering::Equal,
    }
}
