//! Domain entities.
//!
//! All entities are immutable value objects created from row fetches and
//! discarded once the response is serialized; there is no identity map or
//! server-side caching.

pub mod client;
pub mod reservation;
pub mod room;

pub use client::{Client, ClientSortKey};
pub use reservation::{Reservation, ReservationSortKey, Service};
pub use room::{Room, RoomSortKey};
