//! Roster query - list-view state, filter composition and stable sorting.
//!
//! This crate is the reusable core behind every entity listing page of the
//! admin console (roles, teams, users). It provides:
//!
//! - [`ListState`]: the page window, composed filter string, date range and
//!   toggled sort of one page, and the [`ListParams`] they produce
//! - [`Predicate`]: typed filter conditions with the server's wire format
//! - [`Sorter`]: a stable multi-key sorter driven by a [`FieldRegistry`]
//!
//! # Quick Start
//!
//! ```rust
//! use roster_query::{
//!     FieldRegistry, ListMode, ListState, Predicate, SortRule, Sortable, Sorter, Timestamp,
//!     Value,
//! };
//!
//! #[derive(Clone)]
//! struct Role {
//!     name: String,
//!     is_default: bool,
//!     created_at: i64,
//! }
//!
//! impl Sortable for Role {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::String(&self.name),
//!             "isDefault" => Value::Bool(self.is_default),
//!             "createdAt" => Value::Timestamp(Timestamp(self.created_at)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! // Lazy pages turn state into request parameters.
//! let mut state = ListState::new(ListMode::Lazy, 10);
//! state.compose_filter_query([Some(Predicate::contains("name", "admin"))]);
//! assert_eq!(state.params().filter.as_deref(), Some("name:contains admin"));
//!
//! // Eager pages sort locally.
//! let sorter = Sorter::new(
//!     FieldRegistry::new().string("name").bool("isDefault").timestamp("createdAt"),
//! );
//! let roles = vec![
//!     Role { name: "viewer".into(), is_default: false, created_at: 1 },
//!     Role { name: "admin".into(), is_default: true, created_at: 2 },
//! ];
//! let sorted = sorter
//!     .sort_records(&roles, &[SortRule::desc("createdAt"), SortRule::desc("isDefault")])
//!     .unwrap();
//! assert_eq!(sorted[0].name, "admin");
//! ```
//!
//! # Null Ordering
//!
//! Absent values sort last in ascending order and first in descending
//! order. A value whose runtime type differs from the registered field kind
//! counts as absent.

mod error;
mod filter;
mod ordering;
mod params;
mod predicate;
mod registry;
mod sorter;
mod state;
mod traits;
mod value;
mod window;

// Re-export public API
pub use error::{Result, SortError};
pub use filter::{
    build_date_range_filter, compose_filter_query, format_date_input, DateRange, DATE_TIME_SUFFIX,
};
pub use ordering::{compare_values, SortOrder, SortRule};
pub use params::ListParams;
pub use predicate::{Predicate, PredicateOp};
pub use registry::{FieldKind, FieldRegistry};
pub use sorter::Sorter;
pub use state::{ListMode, ListState};
pub use traits::Sortable;
pub use value::{Number, Timestamp, Value};
pub use window::{PageWindow, PageWindowSource, DEFAULT_PAGE_SIZE};
