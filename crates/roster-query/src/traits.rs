//! Field access for sortable and filterable records.

use crate::value::Value;

/// Records addressable by field name, for sorting and local filtering.
///
/// ```
/// use roster_query::{Sortable, Value};
///
/// struct Team {
///     name: String,
///     is_default: bool,
/// }
///
/// impl Sortable for Team {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "isDefault" => Value::Bool(self.is_default),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Sortable {
    /// Returns the value of a field, or [`Value::None`] if the field does
    /// not exist or is null on this record.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Same as [`field_value`](Self::field_value), shaped as the accessor
    /// [`Sorter::sort`](crate::Sorter::sort) takes.
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}
