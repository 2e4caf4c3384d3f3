//! `ReservationDao` trait — low-level reservation data access abstraction.

use reserva_core::{Crud, Interface, Reservation, ReservationId, ReservationSortKey};

/// Low-level reservation data access object over `evp_event`.
///
/// List operations filter by matching the `clientId` column as text.
/// Implementations resolve the nested `client`/`room` references with one
/// extra single-row lookup each per returned reservation.
///
/// Conflict predicates carry the legacy behavior: `add` counts rows with
/// the incoming reservation's own `eventId` (an existing-id check), and
/// `update` counts rows with the same `clientId` excluding the updated
/// `eventId`. Neither predicate detects overlapping time slots.
pub trait ReservationDao: Crud<Reservation, ReservationSortKey, ReservationId> + Interface {}
