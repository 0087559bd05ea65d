//! Request Options
//!
//! Flattens caller-supplied filter, sort and page options into the query
//! parameter list sent with a list request.

/// Default page size for paginated lists
pub const ITEMS_PER_PAGE: u32 = 20;

/// Zero-based page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
}

impl Pagination {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn first() -> Self {
        Self::default()
    }

    pub fn next(self) -> Self {
        Self { page: self.page + 1, ..self }
    }

    pub fn previous(self) -> Self {
        Self { page: self.page.saturating_sub(1), ..self }
    }

    /// Number of pages needed for `total` rows
    pub fn page_count(&self, total: u64) -> u64 {
        if self.size == 0 {
            return 0;
        }
        total.div_ceil(u64::from(self.size))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 0, size: ITEMS_PER_PAGE }
    }
}

/// Flat `key=value` parameter list; `sort` may repeat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    params: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter unless its value is empty
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.params.push((key.into(), value));
        }
        self
    }

    /// Criteria filter, e.g. `filter("family.id", "equals", 3)` → `family.id.equals=3`
    pub fn filter(self, field: &str, operator: &str, value: impl ToString) -> Self {
        self.param(format!("{}.{}", field, operator), value)
    }

    /// One `sort` parameter per entry, e.g. `["title,asc", "id,asc"]`
    pub fn sort<I, S>(mut self, sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for entry in sort {
            self = self.param("sort", entry.into());
        }
        self
    }

    pub fn page(self, pagination: Pagination) -> Self {
        self.param("page", pagination.page).param("size", pagination.size)
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn into_params(self) -> Vec<(String, String)> {
        self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
