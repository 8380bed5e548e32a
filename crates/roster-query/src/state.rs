//! Pagination, filter and sort state for one list view.
//!
//! A [`ListState`] is owned by exactly one page. It performs no I/O and
//! never fails: it records what the user asked for and turns it into the
//! [`ListParams`] for the next fetch.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::filter::{self, DateRange};
use crate::ordering::{SortOrder, SortRule};
use crate::params::ListParams;
use crate::window::{PageWindow, PageWindowSource, DEFAULT_PAGE_SIZE};

/// Where sorting, filtering and paging happen for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// The server sorts, filters and pages on every request.
    #[default]
    Lazy,
    /// The full set is fetched once and handled on the client.
    Eager,
}

impl ListMode {
    /// Returns `true` for [`ListMode::Lazy`].
    pub fn is_lazy(self) -> bool {
        matches!(self, ListMode::Lazy)
    }
}

/// Pagination/filter/sort state controller.
///
/// # Example
///
/// ```
/// use roster_query::{ListMode, ListState, Predicate, SortOrder};
///
/// let mut state = ListState::new(ListMode::Lazy, 10);
/// state.compose_filter_query([Some(Predicate::contains("name", "ops")), None]);
///
/// let rule = state.toggle_sort("name");
/// assert_eq!(rule.order, SortOrder::Asc);
///
/// let params = state.params();
/// assert_eq!(params.to_string(), "skip=0&take=10&where=name:contains ops&orderBy=name:asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    mode: ListMode,
    page_size: u64,
    window: PageWindow,
    filter: String,
    date_range: Option<DateRange>,
    active_sort: Option<SortRule>,
    next_order: SortOrder,
}

impl ListState {
    /// Creates the state for a page. A zero page size falls back to
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(mode: ListMode, page_size: u64) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        ListState {
            mode,
            page_size,
            window: PageWindow::first(page_size),
            filter: String::new(),
            date_range: None,
            active_sort: None,
            next_order: SortOrder::Asc,
        }
    }

    /// The page's mode, fixed at construction.
    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Default page size used on reset.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Current page window.
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Updates the page window from a page-change event.
    ///
    /// Without a context the window resets to the first page at the default
    /// page size.
    pub fn set_pagination(&mut self, ctx: Option<&dyn PageWindowSource>) {
        self.window = match ctx {
            Some(source) => PageWindow::from_source(source, self.page_size),
            None => PageWindow::first(self.page_size),
        };
    }

    /// Joins the non-null slots, stores the result as the active filter and
    /// returns it.
    pub fn compose_filter_query<I, P>(&mut self, slots: I) -> String
    where
        I: IntoIterator<Item = Option<P>>,
        P: Display,
    {
        self.filter = filter::compose_filter_query(slots);
        self.filter.clone()
    }

    /// Replaces the active filter string verbatim.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Active filter, or `None` when no predicate is set.
    pub fn filter(&self) -> Option<&str> {
        if self.filter.is_empty() {
            None
        } else {
            Some(&self.filter)
        }
    }

    /// Builds the date range from two inputs, stores it and returns it.
    ///
    /// See [`build_date_range_filter`](crate::build_date_range_filter).
    pub fn build_date_range_filter(
        &mut self,
        start_inclusive: Option<&str>,
        end_inclusive: Option<&str>,
    ) -> Option<DateRange> {
        self.date_range = filter::build_date_range_filter(start_inclusive, end_inclusive);
        self.date_range.clone()
    }

    /// Replaces the active date range.
    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.date_range = range;
    }

    /// Active date range.
    pub fn date_range(&self) -> Option<&DateRange> {
        self.date_range.as_ref()
    }

    /// Clears the filter string and the date range.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.date_range = None;
    }

    /// Makes `field` the active sort key and returns the resulting rule.
    ///
    /// The direction alternates on every call regardless of field, so a
    /// click on a new column after an ascending sort sorts it descending.
    pub fn toggle_sort(&mut self, field: impl Into<String>) -> SortRule {
        let rule = SortRule::new(field, self.next_order);
        self.next_order = self.next_order.flipped();
        self.active_sort = Some(rule.clone());
        rule
    }

    /// The rule produced by the last [`toggle_sort`](Self::toggle_sort).
    pub fn active_sort(&self) -> Option<&SortRule> {
        self.active_sort.as_ref()
    }

    /// Request parameters for the current state.
    ///
    /// Lazy pages send the window, filter, date range and sort. Eager pages
    /// fetch the unfiltered set and send nothing.
    pub fn params(&self) -> ListParams {
        if !self.mode.is_lazy() {
            return ListParams::default();
        }

        ListParams {
            skip: Some(self.window.skip()),
            take: Some(self.window.take()),
            filter: self.filter().map(str::to_string),
            start_date: self.date_range.as_ref().map(|r| r.start.clone()),
            end_date: self.date_range.as_ref().map(|r| r.end.clone()),
            order_by: self.active_sort.as_ref().map(SortRule::to_string),
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        ListState::new(ListMode::default(), DEFAULT_PAGE_SIZE)
    }
}
