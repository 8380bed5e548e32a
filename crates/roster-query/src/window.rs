//! Page window (offset + page size).

use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Anything that can report a requested page window, typically the table
/// widget emitting a page-change event.
///
/// Values are signed because UI collaborators are not trusted to keep them
/// in range; [`PageWindow::from_source`] clamps them.
pub trait PageWindowSource {
    /// Zero-based offset of the first requested row.
    fn first_row(&self) -> i64;
    /// Number of requested rows.
    fn row_count(&self) -> i64;
}

/// The current page window: rows `skip..skip + take`.
///
/// `take` is always greater than zero. `skip` is usually a multiple of the
/// page size but any offset is valid, which supports jump-to-row.
/// Deserialized windows go through [`PageWindow::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WindowFields")]
pub struct PageWindow {
    skip: u64,
    take: u64,
}

#[derive(Deserialize)]
struct WindowFields {
    #[serde(default)]
    skip: u64,
    #[serde(default)]
    take: u64,
}

impl From<WindowFields> for PageWindow {
    fn from(fields: WindowFields) -> Self {
        PageWindow::new(fields.skip, fields.take)
    }
}

impl PageWindow {
    /// Creates a window, replacing a zero `take` with [`DEFAULT_PAGE_SIZE`].
    pub fn new(skip: u64, take: u64) -> Self {
        PageWindow {
            skip,
            take: if take == 0 { DEFAULT_PAGE_SIZE } else { take },
        }
    }

    /// The first page for the given page size.
    pub fn first(page_size: u64) -> Self {
        Self::new(0, page_size)
    }

    /// Reads a window from a page-change source.
    ///
    /// Negative offsets clamp to zero; non-positive row counts fall back to
    /// `page_size`.
    pub fn from_source(source: &dyn PageWindowSource, page_size: u64) -> Self {
        let skip = u64::try_from(source.first_row()).unwrap_or(0);
        let take = u64::try_from(source.row_count())
            .ok()
            .filter(|take| *take > 0)
            .unwrap_or(page_size);
        Self::new(skip, take)
    }

    /// Offset of the first row.
    pub fn skip(&self) -> u64 {
        self.skip
    }

    /// Number of rows in the window.
    pub fn take(&self) -> u64 {
        self.take
    }

    /// Zero-based page index the window starts in.
    pub fn page_index(&self) -> u64 {
        self.skip / self.take
    }

    /// Number of pages needed to show `total` rows at this page size.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.take)
    }

    /// Returns the part of `items` this window covers.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as u64;
        let start = self.skip.min(len) as usize;
        let end = self.skip.saturating_add(self.take).min(len) as usize;
        &items[start..end]
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindowSource for PageWindow {
    fn first_row(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    fn row_count(&self) -> i64 {
        i64::try_from(self.take).unwrap_or(i64::MAX)
    }
}

/// `(first_row, row_count)` pairs, as emitted by most table widgets.
impl PageWindowSource for (i64, i64) {
    fn first_row(&self) -> i64 {
        self.0
    }

    fn row_count(&self) -> i64 {
        self.1
    }
}
