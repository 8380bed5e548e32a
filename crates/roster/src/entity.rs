//! The contract an entity type fulfils to be listed by a [`ListPage`](crate::ListPage).

use roster_query::{
    build_date_range_filter, FieldRegistry, Predicate, SortRule, Sortable, Timestamp,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ListError;

/// A record type shown in a list page.
pub trait Entity: Sortable + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The page's filter inputs.
    type Filters: FilterSet;
    /// Payload for creating a record.
    type Draft: Serialize + Send + Sync;
    /// Payload for updating a record.
    type Patch: Serialize + Send + Sync;

    /// REST resource name, e.g. `"roles"`.
    const RESOURCE: &'static str;

    fn id(&self) -> i64;

    /// Creation timestamp, used for date-range filtering on eager pages.
    fn created_at(&self) -> Timestamp;

    /// Sortable fields and their comparators.
    fn registry() -> FieldRegistry;

    /// Sort applied to an eager page after every full fetch.
    fn default_order() -> Vec<SortRule>;

    /// Checks a draft before it is sent.
    fn validate_draft(_draft: &Self::Draft) -> Result<(), ListError> {
        Ok(())
    }

    /// Checks a patch before it is sent.
    fn validate_patch(_patch: &Self::Patch) -> Result<(), ListError> {
        Ok(())
    }
}

/// The filter inputs of one page.
///
/// Each input maps to at most one predicate slot. Slots are returned in the
/// order their fragments appear in the `where` parameter.
pub trait FilterSet: Default + Send + Sync {
    /// One entry per slot; `None` for inputs that are empty.
    fn predicates(&self) -> Vec<Option<Predicate>>;

    /// Raw `(start, end)` date inputs, if the page has a date range.
    fn date_inputs(&self) -> (Option<&str>, Option<&str>) {
        (None, None)
    }

    /// Resets every input.
    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if no slot is set.
    fn is_empty(&self) -> bool {
        let (start, end) = self.date_inputs();
        self.predicates().iter().all(Option::is_none)
            && build_date_range_filter(start, end).is_none()
    }
}

/// Payload type for operations a resource does not offer. It has no values,
/// so such calls cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoPayload {}

/// Returns an error when `input` is missing or blank.
pub(crate) fn require(
    field: &'static str,
    input: &str,
    message: &'static str,
) -> Result<(), ListError> {
    if input.trim().is_empty() {
        Err(ListError::validation(field, message))
    } else {
        Ok(())
    }
}
