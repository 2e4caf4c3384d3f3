//! Generic CRUD contract implemented by every entity access object.

use crate::{ListParams, Pagination, ReservaResult, SortKey};
use async_trait::async_trait;

/// Uniform CRUD contract over an entity type `T` with sort keys `K` and
/// primary key `ID`.
///
/// Every mutating operation returns a freshly computed page (using the same
/// parameters) so callers can refresh their view in one round trip. List
/// operations run a `COUNT` over the filter predicate first and only fetch
/// rows when the count is positive.
#[async_trait]
pub trait Crud<T, K, ID>: Send + Sync
where
    T: Send + Sync,
    K: SortKey,
    ID: Send + Sync,
{
    /// Returns one page of entities matching the filter, together with the
    /// total filtered count.
    async fn list(&self, params: &ListParams<K>) -> ReservaResult<Pagination<T>>;

    /// Inserts a new entity after an entity-specific conflict check, then
    /// returns the refreshed page. Conflicts roll back and surface as
    /// [`ReservaError::Conflict`](crate::ReservaError::Conflict).
    async fn add(&self, entity: &T, params: &ListParams<K>) -> ReservaResult<Pagination<T>>;

    /// Updates an existing entity after a conflict check that excludes the
    /// row being updated, then returns the refreshed page.
    async fn update(&self, entity: &T, params: &ListParams<K>) -> ReservaResult<Pagination<T>>;

    /// Deletes by primary key, then returns the refreshed page.
    async fn delete(&self, id: ID, params: &ListParams<K>) -> ReservaResult<Pagination<T>>;

    /// Single-row fetch by primary key; `Ok(None)` when absent.
    async fn get_by_id(&self, id: ID) -> ReservaResult<Option<T>>;
}
