//! Field values as seen by the sorter and by local predicate evaluation.
//!
//! Records hand out a [`Value`] per field name through
//! [`Sortable`](crate::Sortable). Values borrow from the record, so sorting
//! never clones field data.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// One field of one record.
///
/// ```
/// use roster_query::{Number, Timestamp, Value};
///
/// struct Team {
///     name: String,
///     parent_id: Option<i64>,
///     created_at: i64,
/// }
///
/// fn team_field<'a>(team: &'a Team, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::from(&team.name),
///         "parentId" => team.parent_id.map(Number::I64).into(),
///         "createdAt" => Value::Timestamp(Timestamp(team.created_at)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    Timestamp(Timestamp),
    Bool(bool),
    /// Null, missing, or not a field of this record.
    None,
}

impl Value<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value<'_> {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(t: Timestamp) -> Self {
        Value::Timestamp(t)
    }
}

/// Integer ids and counts, or the occasional float.
///
/// Mixed variants compare by exact value: integers through `i128`, and an
/// integer against a float without rounding either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(f) if f.is_nan())
    }

    /// Natural numeric order. `None` only if a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self.integer(), other.integer()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (Some(a), None) => compare_int_float(a, other.float()),
            (None, Some(b)) => compare_int_float(b, self.float()).map(Ordering::reverse),
            (None, None) => self.float().partial_cmp(&other.float()),
        }
    }

    fn integer(self) -> Option<i128> {
        match self {
            Number::I64(n) => Some(i128::from(n)),
            Number::U64(n) => Some(i128::from(n)),
            Number::F64(_) => None,
        }
    }

    fn float(self) -> f64 {
        match self {
            Number::F64(f) => f,
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
        }
    }
}

// i128 bounds as floats: -2^127 is exact, 2^127 is one past the maximum.
const I128_MIN_F: f64 = -170_141_183_460_469_231_731_687_303_715_884_105_728.0;
const I128_END_F: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

fn compare_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I128_END_F {
        return Some(Ordering::Less);
    }
    if float < I128_MIN_F {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    // In range, so the cast is exact.
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => whole.partial_cmp(&float),
        unequal => Some(unequal),
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(i64::from(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// Instant in UTC, in milliseconds since the Unix epoch.
///
/// ```
/// use roster_query::Timestamp;
///
/// let ts = Timestamp::parse("2024-01-01T00:00:00.000Z").unwrap();
/// assert_eq!(ts, Timestamp(1_704_067_200_000));
/// assert_eq!(Timestamp::parse("2024-01-01T00:00"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Parses an RFC 3339 date-time such as `2024-01-31T23:59:00.000Z`.
    pub fn parse(input: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(input)
            .ok()
            .map(|dt| Timestamp(dt.timestamp_millis()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_millis())
    }
}
