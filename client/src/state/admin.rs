//! List bookkeeping for the staff tables: filters, paging, query strings.
//!
//! DESIGN
//! ======
//! Pages keep one `ComplaintFilters`/`UserFilters` and one `Pager` in signals
//! and rebuild the backend query from them on every change. The pager is
//! zero-based internally; the backend counts pages from one.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{ComplaintStatus, Priority};

pub const ROWS_PER_PAGE_OPTIONS: [u32; 3] = [5, 10, 25];
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;
/// Recent complaints shown on the admin dashboard.
pub const DASHBOARD_RECENT_LIMIT: u32 = 5;

/// Either every value or exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl Filter<ComplaintStatus> {
    /// Parse a `<select>` value; `"all"` or anything unknown means no filter.
    pub fn from_select(raw: &str) -> Self {
        ComplaintStatus::parse(raw).map_or(Self::All, Self::Only)
    }

    pub fn select_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(s) => s.as_str(),
        }
    }
}

impl Filter<Priority> {
    pub fn from_select(raw: &str) -> Self {
        Priority::parse(raw).map_or(Self::All, Self::Only)
    }

    pub fn select_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(p) => p.as_str(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplaintFilters {
    pub search: String,
    pub status: Filter<ComplaintStatus>,
    pub priority: Filter<Priority>,
}

/// Zero-based page cursor over a server-side total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub rows_per_page: u32,
    pub total: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 0, rows_per_page: DEFAULT_ROWS_PER_PAGE, total: 0 }
    }
}

impl Pager {
    pub fn page_count(&self) -> u32 {
        let per = u64::from(self.rows_per_page.max(1));
        u32::try_from(self.total.div_ceil(per)).unwrap_or(u32::MAX).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Change page size; unsupported sizes are ignored. Always rewinds.
    pub fn set_rows(&mut self, rows: u32) {
        if ROWS_PER_PAGE_OPTIONS.contains(&rows) {
            self.rows_per_page = rows;
        }
        self.page = 0;
    }

    /// Filters changed: start from the first page again.
    pub fn rewind(&mut self) {
        self.page = 0;
    }

    /// Record a new server total, clamping the page into range.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.page = self.page.min(self.page_count() - 1);
    }

    /// `"11-20 of 42"`, or `"0 of 0"` for an empty listing.
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0 of 0".to_owned();
        }
        let per = u64::from(self.rows_per_page);
        let start = u64::from(self.page) * per + 1;
        let end = (start + per - 1).min(self.total);
        format!("{start}-{end} of {}", self.total)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("page", (self.page + 1).to_string()), ("limit", self.rows_per_page.to_string())]
    }
}

/// Backend query for the complaints table. Unset filters are omitted.
pub fn complaint_query(filters: &ComplaintFilters, pager: &Pager) -> Vec<(&'static str, String)> {
    let mut query = pager.query();
    if let Filter::Only(status) = filters.status {
        query.push(("status", status.as_str().to_owned()));
    }
    if let Filter::Only(priority) = filters.priority {
        query.push(("priority", priority.as_str().to_owned()));
    }
    let search = filters.search.trim();
    if !search.is_empty() {
        query.push(("search", search.to_owned()));
    }
    query
}

/// Backend query for the users table.
pub fn user_query(search: &str, pager: &Pager) -> Vec<(&'static str, String)> {
    let mut query = pager.query();
    let search = search.trim();
    if !search.is_empty() {
        query.push(("search", search.to_owned()));
    }
    query
}

/// Dashboard "recent complaints" query: first page, newest first.
pub fn recent_complaints_query() -> Vec<(&'static str, String)> {
    vec![("page", "1".to_owned()), ("limit", DASHBOARD_RECENT_LIMIT.to_string())]
}
