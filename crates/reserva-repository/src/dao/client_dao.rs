//! `ClientDao` trait — low-level client data access abstraction.

use reserva_core::{Client, ClientId, ClientSortKey, Crud, Interface};

/// Low-level client data access object over `evp_client`.
///
/// The filter predicate of list operations is a substring match on
/// `document`; the conflict predicate of `add`/`update` is `document`
/// equality (excluding the updated row for `update`).
pub trait ClientDao: Crud<Client, ClientSortKey, ClientId> + Interface {}
