//! Per-field comparator registry.
//!
//! Every field a list view can sort by is registered up front with the kind
//! of comparison it uses. The sorter refuses rules naming a field that is
//! not registered instead of guessing from runtime values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortError};
use crate::ordering::SortRule;
use crate::value::Value;

/// Comparator kind for a sortable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Lexicographic string comparison.
    String,
    /// Numeric comparison.
    Number,
    /// Chronological comparison.
    Timestamp,
    /// `false` before `true`.
    Bool,
}

impl FieldKind {
    /// Returns `true` if the value has the runtime type this kind compares.
    /// A NaN is not a number here.
    pub fn accepts(self, value: &Value<'_>) -> bool {
        match (self, value) {
            (FieldKind::Number, Value::Number(n)) => !n.is_nan(),
            (FieldKind::String, Value::String(_))
            | (FieldKind::Timestamp, Value::Timestamp(_))
            | (FieldKind::Bool, Value::Bool(_)) => true,
            _ => false,
        }
    }

    /// Returns the value unchanged if accepted, `Value::None` otherwise.
    pub fn admit<'a>(self, value: &Value<'a>) -> Value<'a> {
        if self.accepts(value) {
            value.clone()
        } else {
            Value::None
        }
    }
}

/// Registry of sortable fields and their comparator kinds.
///
/// ```
/// use roster_query::{FieldKind, FieldRegistry};
///
/// let registry = FieldRegistry::new()
///     .string("name")
///     .timestamp("createdAt")
///     .bool("isDefault");
///
/// assert_eq!(registry.kind("name"), Some(FieldKind::String));
/// assert_eq!(registry.kind("unknown"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    fields: BTreeMap<String, FieldKind>,
}

impl FieldRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        FieldRegistry::default()
    }

    /// Registers a field with the given comparator kind.
    pub fn register(mut self, field: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.insert(field.into(), kind);
        self
    }

    /// Registers a string field.
    pub fn string(self, field: impl Into<String>) -> Self {
        self.register(field, FieldKind::String)
    }

    /// Registers a numeric field.
    pub fn number(self, field: impl Into<String>) -> Self {
        self.register(field, FieldKind::Number)
    }

    /// Registers a timestamp field.
    pub fn timestamp(self, field: impl Into<String>) -> Self {
        self.register(field, FieldKind::Timestamp)
    }

    /// Registers a boolean field.
    pub fn bool(self, field: impl Into<String>) -> Self {
        self.register(field, FieldKind::Bool)
    }

    /// Returns the comparator kind registered for a field.
    pub fn kind(&self, field: &str) -> Option<FieldKind> {
        self.fields.get(field).copied()
    }

    /// Returns `true` if the field is registered.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates registered field names in lexical order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Resolves the comparator kind of every rule, in rule order.
    ///
    /// Fails on the first rule naming an unregistered field.
    pub fn resolve(&self, rules: &[SortRule]) -> Result<Vec<FieldKind>> {
        rules
            .iter()
            .map(|rule| {
                self.kind(&rule.field)
                    .ok_or_else(|| SortError::UnknownField(rule.field.clone()))
            })
            .collect()
    }
}
