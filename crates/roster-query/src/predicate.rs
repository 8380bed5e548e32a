//! Typed filter predicates.
//!
//! A [`Predicate`] is a single named filter condition. It serializes to the
//! `where` fragment the REST API understands and can also be evaluated
//! locally against a record field, which eager list views use to filter
//! their cached result set.

use std::fmt;

use crate::value::{Number, Value};

/// Comparison carried by a predicate, with its operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateOp {
    /// Substring match: `field:contains value`.
    Contains(String),
    /// Exact match: `field:equals value`.
    Equals(String),
    /// Boolean match: `field:boolean(true)`.
    Boolean(bool),
    /// Integer match: `field: int(+value)`.
    Int(i64),
}

impl PredicateOp {
    /// Returns the wire name of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            PredicateOp::Contains(_) => "contains",
            PredicateOp::Equals(_) => "equals",
            PredicateOp::Boolean(_) => "boolean",
            PredicateOp::Int(_) => "int",
        }
    }
}

/// A single filter condition on one field.
///
/// # Example
///
/// ```
/// use roster_query::Predicate;
///
/// assert_eq!(Predicate::contains("name", "ops").to_string(), "name:contains ops");
/// assert_eq!(Predicate::equals("gender", "MALE").to_string(), "gender:equals MALE");
/// assert_eq!(Predicate::boolean("active", true).to_string(), "active:boolean(true)");
/// assert_eq!(Predicate::int("parentId", 7).to_string(), "parentId: int(+7)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// The field name to test.
    pub field: String,
    /// The comparison and its operand.
    pub op: PredicateOp,
}

impl Predicate {
    /// Creates a predicate.
    pub fn new(field: impl Into<String>, op: PredicateOp) -> Self {
        Predicate {
            field: field.into(),
            op,
        }
    }

    /// Substring predicate.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, PredicateOp::Contains(value.into()))
    }

    /// Exact string predicate.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, PredicateOp::Equals(value.into()))
    }

    /// Boolean predicate.
    pub fn boolean(field: impl Into<String>, value: bool) -> Self {
        Self::new(field, PredicateOp::Boolean(value))
    }

    /// Integer predicate.
    pub fn int(field: impl Into<String>, value: i64) -> Self {
        Self::new(field, PredicateOp::Int(value))
    }

    /// Builds a substring predicate only when `input` has text.
    pub fn contains_if(field: &str, input: Option<&str>) -> Option<Self> {
        non_empty(input).map(|text| Self::contains(field, text))
    }

    /// Builds an exact-match predicate only when `input` has text.
    pub fn equals_if(field: &str, input: Option<&str>) -> Option<Self> {
        non_empty(input).map(|text| Self::equals(field, text))
    }

    /// Evaluates this predicate against a field value.
    ///
    /// Absent values and type mismatches never match.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.op, field_value) {
            (PredicateOp::Contains(needle), Value::String(s)) => s.contains(needle.as_str()),
            (PredicateOp::Equals(expected), Value::String(s)) => *s == expected.as_str(),
            (PredicateOp::Boolean(expected), Value::Bool(b)) => b == expected,
            (PredicateOp::Int(expected), Value::Number(n)) => {
                n.compare(Number::I64(*expected)) == Some(std::cmp::Ordering::Equal)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.op {
            PredicateOp::Contains(value) | PredicateOp::Equals(value) => {
                write!(f, "{}:{} {}", self.field, self.op.as_str(), value)
            }
            PredicateOp::Boolean(value) => write!(f, "{}:boolean({})", self.field, value),
            PredicateOp::Int(value) => write!(f, "{}: int(+{})", self.field, value),
        }
    }
}

fn non_empty(input: Option<&str>) -> Option<&str> {
    input.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Timestamp;

    #[test]
    fn wire_forms() {
        assert_eq!(
            Predicate::contains("name", "core team").to_string(),
            "name:contains core team"
        );
        assert_eq!(
            Predicate::equals("role", "ADMIN").to_string(),
            "role:equals ADMIN"
        );
        assert_eq!(
            Predicate::boolean("active", false).to_string(),
            "active:boolean(false)"
        );
        assert_eq!(Predicate::int("parentId", 12).to_string(), "parentId: int(+12)");
    }

    #[test]
    fn conditional_builders() {
        assert_eq!(Predicate::contains_if("name", None), None);
        assert_eq!(Predicate::contains_if("name", Some("")), None);
        assert_eq!(
            Predicate::contains_if("name", Some("ops")),
            Some(Predicate::contains("name", "ops"))
        );
        assert_eq!(
            Predicate::equals_if("gender", Some("FEMALE")),
            Some(Predicate::equals("gender", "FEMALE"))
        );
    }

    #[test]
    fn contains_matches_substring() {
        let p = Predicate::contains("name", "eng");
        assert!(p.matches(&Value::String("engineering")));
        assert!(p.matches(&Value::String("platform engineers")));
        assert!(!p.matches(&Value::String("sales")));
    }

    #[test]
    fn equals_matches_exactly() {
        let p = Predicate::equals("gender", "MALE");
        assert!(p.matches(&Value::String("MALE")));
        assert!(!p.matches(&Value::String("FEMALE")));
        assert!(!p.matches(&Value::String("male")));
    }

    #[test]
    fn boolean_and_int() {
        let active = Predicate::boolean("active", true);
        assert!(active.matches(&Value::Bool(true)));
        assert!(!active.matches(&Value::Bool(false)));

        let parent = Predicate::int("parentId", 3);
        assert!(parent.matches(&Value::Number(Number::I64(3))));
        assert!(parent.matches(&Value::Number(Number::U64(3))));
        assert!(!parent.matches(&Value::Number(Number::I64(4))));
    }

    #[test]
    fn absent_or_mismatched_never_matches() {
        let p = Predicate::contains("name", "a");
        assert!(!p.matches(&Value::None));
        assert!(!p.matches(&Value::Bool(true)));
        assert!(!p.matches(&Value::Timestamp(Timestamp(0))));
    }
}
