//! Request parameters for list fetches.

use std::fmt;

use serde::Serialize;

/// Query parameters for one list fetch.
///
/// Absent members are omitted from serialization entirely; an empty filter
/// is never sent as `where=`.
///
/// ```
/// use roster_query::ListParams;
///
/// let params = ListParams {
///     skip: Some(0),
///     take: Some(10),
///     filter: Some("name:contains ops".into()),
///     order_by: Some("name:asc".into()),
///     ..ListParams::default()
/// };
/// assert_eq!(params.to_string(), "skip=0&take=10&where=name:contains ops&orderBy=name:asc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Offset of the first row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    /// Number of rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<u64>,
    /// Comma-joined predicate string.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Inclusive lower creation-date bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive upper creation-date bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// `field:asc` or `field:desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ListParams {
    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }

    /// Returns the set parameters as `(name, value)` pairs in wire order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(take) = self.take {
            pairs.push(("take", take.to_string()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("where", filter.clone()));
        }
        if let Some(start) = &self.start_date {
            pairs.push(("startDate", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("endDate", end.clone()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("orderBy", order_by.clone()));
        }
        pairs
    }
}

/// Unencoded `name=value&...` form, for logs.
impl fmt::Display for ListParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .to_pairs()
            .into_iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        f.write_str(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params() {
        let params = ListParams::default();
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
        assert_eq!(serde_json::to_value(&params).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn serialized_names() {
        let params = ListParams {
            skip: Some(10),
            take: Some(10),
            filter: Some("active:boolean(true)".to_string()),
            start_date: Some("2024-01-01T00:00:00.000Z".to_string()),
            end_date: Some("2024-01-31T23:59:00.000Z".to_string()),
            order_by: Some("createdAt:desc".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "skip": 10,
                "take": 10,
                "where": "active:boolean(true)",
                "startDate": "2024-01-01T00:00:00.000Z",
                "endDate": "2024-01-31T23:59:00.000Z",
                "orderBy": "createdAt:desc",
            })
        );
    }

    #[test]
    fn pairs_in_wire_order() {
        let params = ListParams {
            take: Some(25),
            order_by: Some("name:asc".to_string()),
            skip: Some(50),
            ..ListParams::default()
        };
        let names: Vec<_> = params.to_pairs().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["skip", "take", "orderBy"]);
    }
}
