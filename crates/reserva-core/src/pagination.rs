//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new page request.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.min(Self::MAX_SIZE),
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page * self.size
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A page of results together with the total number of rows matching the
/// filter predicate before page slicing.
///
/// The counter is computed by a dedicated `COUNT` query over the same
/// predicate as the data query, so it is independent of any limit/offset
/// applied to the page itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination<T> {
    /// Total matching rows before page slicing.
    pub filter_counter: u64,
    /// The page of entities.
    pub data: Vec<T>,
}

impl<T> Pagination<T> {
    /// Creates a new pagination wrapper.
    #[must_use]
    pub fn new(filter_counter: u64, data: Vec<T>) -> Self {
        Self {
            filter_counter,
            data,
        }
    }

    /// Creates an empty pagination (zero count, no data).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    /// Returns true if the page holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entities on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the total number of pages for the given page size.
    #[must_use]
    pub fn total_pages(&self, size: usize) -> u64 {
        if size == 0 {
            0
        } else {
            self.filter_counter.div_ceil(size as u64)
        }
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Pagination<U> {
        Pagination {
            filter_counter: self.filter_counter,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for Pagination<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Pagination<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
