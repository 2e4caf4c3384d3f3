//! List-operation parameters.
//!
//! Replaces the legacy open parameter map (`FILTER` / `SQL_ORDER_BY` /
//! `SQL_PAGINATION`) with a closed, typed struct. Ordering is restricted to
//! an allow-list of sortable columns via per-entity [`SortKey`] enums, and
//! limit/offset values are bound rather than concatenated, so no
//! caller-supplied text reaches the query unparameterized.

use crate::PageRequest;
use serde::{Deserialize, Serialize};

/// A sortable column of an entity's table.
///
/// Implementations enumerate the allow-listed columns; `column()` returns
/// the exact column name appended to `ORDER BY`.
pub trait SortKey: Copy + Send + Sync + 'static {
    /// Returns the database column name for this sort key.
    fn column(&self) -> &'static str;
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ordering: allow-listed column plus direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sort<K> {
    /// The column to sort by.
    pub key: K,
    /// The direction to sort in.
    pub direction: SortDirection,
}

impl<K: SortKey> Sort<K> {
    /// Creates a new sort.
    #[must_use]
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Creates an ascending sort.
    #[must_use]
    pub fn asc(key: K) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Creates a descending sort.
    #[must_use]
    pub fn desc(key: K) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Renders the `ORDER BY` clause body (column and direction).
    #[must_use]
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.key.column(), self.direction.as_sql())
    }
}

/// Parameters accepted by every list operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams<K> {
    /// Substring match against the entity's searchable column.
    pub filter: Option<String>,
    /// Ordering; omitted means database order.
    pub sort: Option<Sort<K>>,
    /// Page slicing; omitted means the full filtered set.
    pub page: Option<PageRequest>,
}

impl<K> Default for ListParams<K> {
    fn default() -> Self {
        Self {
            filter: None,
            sort: None,
            page: None,
        }
    }
}

impl<K: SortKey> ListParams<K> {
    /// Creates parameters with only a substring filter.
    #[must_use]
    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Sets the ordering.
    #[must_use]
    pub fn with_sort(mut self, sort: Sort<K>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the page slicing.
    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    /// Returns the filter value bound into `LIKE CONCAT('%', ?, '%')`.
    ///
    /// An absent filter binds the empty string, which matches every row.
    #[must_use]
    pub fn filter_value(&self) -> &str {
        self.filter.as_deref().unwrap_or("")
    }

    /// Renders the optional `ORDER BY` / `LIMIT ? OFFSET ?` suffix appended
    /// to the base list query. Limit and offset are bound separately via
    /// [`limit_offset`](Self::limit_offset).
    #[must_use]
    pub fn query_suffix(&self) -> String {
        let mut suffix = String::new();
        if let Some(sort) = &self.sort {
            suffix.push_str(" ORDER BY ");
            suffix.push_str(&sort.to_sql());
        }
        if self.page.is_some() {
            suffix.push_str(" LIMIT ? OFFSET ?");
        }
        suffix
    }

    /// Returns the bind values for the `LIMIT ? OFFSET ?` placeholders,
    /// if page slicing was requested.
    #[must_use]
    pub fn limit_offset(&self) -> Option<(i64, i64)> {
        self.page
            .map(|p| (p.limit() as i64, p.offset() as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
    enum TestKey {
        Name,
    }

    impl SortKey for TestKey {
        fn column(&self) -> &'static str {
            "name"
        }
    }

    #[test]
    fn test_default_params() {
        let params: ListParams<TestKey> = ListParams::default();
        assert_eq!(params.filter_value(), "");
        assert_eq!(params.query_suffix(), "");
        assert!(params.limit_offset().is_none());
    }

    #[test]
    fn test_filter_value() {
        let params: ListParams<TestKey> = ListParams::filtered("A1");
        assert_eq!(params.filter_value(), "A1");
    }

    #[test]
    fn test_order_by_rendering() {
        let params = ListParams::<TestKey>::default().with_sort(Sort::desc(TestKey::Name));
        assert_eq!(params.query_suffix(), " ORDER BY name DESC");
    }

    #[test]
    fn test_pagination_rendering() {
        let params = ListParams::<TestKey>::default().with_page(PageRequest::new(2, 10));
        assert_eq!(params.query_suffix(), " LIMIT ? OFFSET ?");
        assert_eq!(params.limit_offset(), Some((10, 20)));
    }

    #[test]
    fn test_full_suffix() {
        let params = ListParams::<TestKey>::default()
            .with_sort(Sort::asc(TestKey::Name))
            .with_page(PageRequest::new(0, 5));
        assert_eq!(params.query_suffix(), " ORDER BY name ASC LIMIT ? OFFSET ?");
        assert_eq!(params.limit_offset(), Some((5, 0)));
    }

    #[test]
    fn test_direction_sql() {
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }
}
