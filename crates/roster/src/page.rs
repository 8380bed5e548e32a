//! Page-level list controller.
//!
//! A [`ListPage`] couples one [`ListState`] with the filter inputs, the
//! fetched rows and the data-access collaborator of a single entity page.
//! Page events take `&mut self`, so at most one fetch is in flight and a
//! stale response can never overwrite a newer one.
//!
//! # Lazy and eager pages
//!
//! A lazy page forwards window, filter, date range and sort to the server
//! on every event and displays what comes back.
//!
//! An eager page fetches the whole set once (on open and after mutations),
//! sorts it by [`Entity::default_order`], and answers page, filter and sort
//! events locally.

use roster_query::{
    ListMode, ListState, PageWindow, PageWindowSource, SortError, SortRule, Sortable, Sorter,
};
use tracing::{debug, info, warn};

use crate::api::EntityApi;
use crate::config::ListConfig;
use crate::entity::{Entity, FilterSet};
use crate::error::{ApiError, ListError, Result};

/// List controller for one entity page.
pub struct ListPage<E: Entity, A> {
    api: A,
    state: ListState,
    filters: E::Filters,
    sorter: Sorter,
    rows_per_page_options: Vec<u64>,
    /// Eager pages: the full fetched set in display order.
    fetched: Vec<E>,
    rows: Vec<E>,
    total_records: u64,
}

impl<E, A> ListPage<E, A>
where
    E: Entity,
    A: EntityApi<E>,
{
    pub fn new(api: A, mode: ListMode, page_size: u64) -> Self {
        ListPage {
            api,
            state: ListState::new(mode, page_size),
            filters: E::Filters::default(),
            sorter: Sorter::new(E::registry()),
            rows_per_page_options: ListConfig::default().rows_per_page_options,
            fetched: Vec::new(),
            rows: Vec::new(),
            total_records: 0,
        }
    }

    /// Creates a page with the mode, page size and rows-per-page options
    /// configured for [`Entity::RESOURCE`].
    pub fn from_config(api: A, config: &ListConfig) -> Self {
        let mut page = Self::new(api, config.mode_for(E::RESOURCE), config.default_page_size);
        page.rows_per_page_options = config.rows_per_page_options.clone();
        page
    }

    /// Initial load from the first page.
    pub async fn open(&mut self) -> Result<()> {
        self.state.set_pagination(None);
        self.refresh().await
    }

    /// Re-runs the fetch for the current pagination, filter and sort.
    pub async fn refresh(&mut self) -> Result<()> {
        let params = self.state.params();
        debug!(resource = E::RESOURCE, params = %params, "fetching list");

        let raw = match self.api.list(&params).await {
            Ok(raw) => raw,
            Err(source) => {
                warn!(resource = E::RESOURCE, error = %source, "list fetch failed");
                return Err(rejected::<E>("fetch", source));
            }
        };
        let total = raw.length;
        let records = raw.decode::<E>()?;

        match self.state.mode() {
            ListMode::Lazy => {
                self.rows = records;
                self.total_records = total;
            }
            ListMode::Eager => {
                self.fetched = self.sorter.sort_records(&records, &self.eager_rules())?;
                self.apply_local();
            }
        }

        info!(
            resource = E::RESOURCE,
            rows = self.rows.len(),
            total = self.total_records,
            "list loaded"
        );
        Ok(())
    }

    /// Page-change event from the table. `None` resets to the first page.
    pub async fn on_page_change(&mut self, ctx: Option<&dyn PageWindowSource>) -> Result<()> {
        self.state.set_pagination(ctx);
        self.reload().await
    }

    /// Rows-per-page selection from the paginator. Returns to the first
    /// page at the new size.
    ///
    /// The size must be one of [`rows_per_page_options`](Self::rows_per_page_options);
    /// with no options configured any non-zero size is accepted.
    pub async fn on_rows_per_page_change(&mut self, rows: u64) -> Result<()> {
        let offered = self.rows_per_page_options.is_empty()
            || self.rows_per_page_options.contains(&rows);
        if rows == 0 || !offered {
            return Err(ListError::validation(
                "rows",
                format!("{rows} rows per page is not offered"),
            ));
        }
        self.state.set_pagination(Some(&PageWindow::new(0, rows)));
        self.reload().await
    }

    /// Edits the filter inputs, then recomposes the filter and date range
    /// and returns to the first page.
    pub async fn on_filter_change<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut E::Filters),
    {
        edit(&mut self.filters);
        self.sync_filters();
        self.state.set_pagination(None);
        self.reload().await
    }

    /// Clears every filter input and the date range.
    pub async fn clear_filters(&mut self) -> Result<()> {
        self.filters.clear();
        self.state.clear_filters();
        self.state.set_pagination(None);
        self.reload().await
    }

    /// Column-header sort request.
    ///
    /// The direction alternates on every request (see
    /// [`ListState::toggle_sort`]). Eager pages reject fields without a
    /// registered comparator before touching any state; lazy pages pass the
    /// field to the server as is.
    pub async fn on_sort(&mut self, field: &str) -> Result<SortRule> {
        if !self.state.mode().is_lazy() && !self.sorter.registry().contains(field) {
            return Err(SortError::UnknownField(field.to_string()).into());
        }

        let rule = self.state.toggle_sort(field);
        debug!(resource = E::RESOURCE, order_by = %rule, "sort requested");

        match self.state.mode() {
            ListMode::Lazy => self.refresh().await?,
            ListMode::Eager => {
                self.fetched = self.sorter.sort_records(&self.fetched, &self.eager_rules())?;
                self.apply_local();
            }
        }
        Ok(rule)
    }

    /// Creates a record and reloads the list.
    ///
    /// Invalid drafts are rejected before any request.
    pub async fn create(&mut self, draft: E::Draft) -> Result<()> {
        E::validate_draft(&draft)?;
        self.api
            .create(&draft)
            .await
            .map_err(|source| mutation_failed::<E>("create", None, source))?;
        info!(resource = E::RESOURCE, "record created");
        self.refresh().await
    }

    /// Updates a record and reloads the list.
    pub async fn update(&mut self, id: i64, patch: E::Patch) -> Result<()> {
        E::validate_patch(&patch)?;
        self.api
            .update(id, &patch)
            .await
            .map_err(|source| mutation_failed::<E>("update", Some(id), source))?;
        info!(resource = E::RESOURCE, id, "record updated");
        self.refresh().await
    }

    /// Deletes a record and reloads the list.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.api
            .delete(id)
            .await
            .map_err(|source| mutation_failed::<E>("delete", Some(id), source))?;
        info!(resource = E::RESOURCE, id, "record deleted");
        self.refresh().await
    }

    /// Rows of the current page.
    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    /// Total matching records across all pages.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Number of pages for the current total and window.
    pub fn page_count(&self) -> u64 {
        self.state.window().page_count(self.total_records)
    }

    /// Page sizes the paginator offers.
    pub fn rows_per_page_options(&self) -> &[u64] {
        &self.rows_per_page_options
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn filters(&self) -> &E::Filters {
        &self.filters
    }

    pub fn mode(&self) -> ListMode {
        self.state.mode()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    async fn reload(&mut self) -> Result<()> {
        match self.state.mode() {
            ListMode::Lazy => self.refresh().await,
            ListMode::Eager => {
                self.apply_local();
                Ok(())
            }
        }
    }

    fn sync_filters(&mut self) {
        self.state.compose_filter_query(self.filters.predicates());
        let (start, end) = self.filters.date_inputs();
        self.state.build_date_range_filter(start, end);
    }

    /// Clicked rule first, then the page's default order as tie-breakers.
    fn eager_rules(&self) -> Vec<SortRule> {
        let defaults = E::default_order();
        match self.state.active_sort() {
            Some(active) => std::iter::once(active.clone())
                .chain(defaults.into_iter().filter(|rule| rule.field != active.field))
                .collect(),
            None => defaults,
        }
    }

    /// Filters the fetched set and cuts the current window out of it.
    fn apply_local(&mut self) {
        let predicates: Vec<_> = self.filters.predicates().into_iter().flatten().collect();
        let range = self.state.date_range();

        let matching: Vec<&E> = self
            .fetched
            .iter()
            .filter(|record| {
                predicates
                    .iter()
                    .all(|p| p.matches(&record.field_value(&p.field)))
            })
            .filter(|record| range.map_or(true, |r| r.contains(record.created_at())))
            .collect();

        self.total_records = matching.len() as u64;
        self.rows = self
            .state
            .window()
            .slice(&matching)
            .iter()
            .map(|record| (*record).clone())
            .collect();
    }
}

fn rejected<E: Entity>(action: &str, source: ApiError) -> ListError {
    ListError::Api {
        action: format!("{action} {}", E::RESOURCE),
        source,
    }
}

fn mutation_failed<E: Entity>(
    action: &'static str,
    id: Option<i64>,
    source: ApiError,
) -> ListError {
    warn!(resource = E::RESOURCE, action, ?id, error = %source, "mutation rejected");
    rejected::<E>(action, source)
}
