//! Filter string composition and date-range normalization.

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::Timestamp;

/// Suffix appended to `YYYY-MM-DDTHH:MM` inputs to make them full UTC
/// date-times.
pub const DATE_TIME_SUFFIX: &str = ":00.000Z";

/// Joins the non-null slots with `,`, in slot order.
///
/// An empty result means "no filter": callers omit the `where` parameter
/// rather than sending it empty.
///
/// ```
/// use roster_query::compose_filter_query;
///
/// let slots = [None, Some("gender:equals MALE"), None, Some("active:boolean(true)")];
/// assert_eq!(compose_filter_query(slots), "gender:equals MALE,active:boolean(true)");
/// assert_eq!(compose_filter_query([None::<&str>, None]), "");
/// ```
pub fn compose_filter_query<I, P>(slots: I) -> String
where
    I: IntoIterator<Item = Option<P>>,
    P: Display,
{
    slots
        .into_iter()
        .flatten()
        .map(|predicate| predicate.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Inclusive creation-date window sent as `startDate` / `endDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound, ISO-8601 UTC.
    pub start: String,
    /// Upper bound, ISO-8601 UTC.
    pub end: String,
}

impl DateRange {
    /// Returns `true` if the timestamp falls within both bounds.
    ///
    /// Bounds that do not parse as RFC 3339 do not restrict the range; the
    /// strings are still forwarded verbatim to the server.
    pub fn contains(&self, ts: Timestamp) -> bool {
        let after_start = Timestamp::parse(&self.start).map_or(true, |start| ts >= start);
        let before_end = Timestamp::parse(&self.end).map_or(true, |end| ts <= end);
        after_start && before_end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Builds a date range from two date-time inputs.
///
/// Returns `None` unless both bounds are present and non-empty. Each bound
/// gets [`DATE_TIME_SUFFIX`] appended.
///
/// ```
/// use roster_query::build_date_range_filter;
///
/// let range = build_date_range_filter(Some("2024-01-01T00:00"), Some("2024-01-31T23:59")).unwrap();
/// assert_eq!(range.start, "2024-01-01T00:00:00.000Z");
/// assert_eq!(range.end, "2024-01-31T23:59:00.000Z");
///
/// assert_eq!(build_date_range_filter(Some("2024-01-01T00:00"), None), None);
/// ```
pub fn build_date_range_filter(
    start_inclusive: Option<&str>,
    end_inclusive: Option<&str>,
) -> Option<DateRange> {
    match (start_inclusive, end_inclusive) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => Some(DateRange {
            start: format!("{start}{DATE_TIME_SUFFIX}"),
            end: format!("{end}{DATE_TIME_SUFFIX}"),
        }),
        _ => None,
    }
}

/// Formats a UTC date-time as a `YYYY-MM-DDTHH:MM` date input value.
///
/// This is the form [`build_date_range_filter`] expects, e.g. for
/// pre-filling the end bound with the current time.
pub fn format_date_input(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}
