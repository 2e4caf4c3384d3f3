//! `RoomDao` trait — low-level room data access abstraction.

use reserva_core::{Crud, Interface, Room, RoomId, RoomSortKey};

/// Low-level room data access object over `evp_room`.
///
/// The filter predicate of list operations is a substring match on
/// `name`; the conflict predicate of `add`/`update` is `name` equality
/// (excluding the updated row for `update`).
pub trait RoomDao: Crud<Room, RoomSortKey, RoomId> + Interface {}
