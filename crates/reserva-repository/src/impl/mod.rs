//! Repository layer implementations.
//!
//! Every repository flattens the DAO's typed errors into the
//! message-carrying [`RawRecord`] contract: business conditions surface
//! their own message, infrastructure failures are logged here and replaced
//! with a generic caller-facing message.

mod client_repository_impl;
mod reservation_repository_impl;
mod room_repository_impl;

pub use client_repository_impl::ClientRepositoryImpl;
pub use reservation_repository_impl::ReservationRepositoryImpl;
pub use room_repository_impl::RoomRepositoryImpl;

use reserva_core::{Pagination, RawRecord, ReservaError, ReservaResult};
use tracing::error;

/// Maps a DAO listing result onto the repository record contract.
fn listing_record<T>(result: ReservaResult<Pagination<T>>) -> RawRecord<T> {
    match result {
        Ok(pagination) => RawRecord::with_pagination(pagination),
        Err(e) => {
            error!("Error getting list: {}", e);
            RawRecord::message("Error getting list")
        }
    }
}

/// Maps a DAO mutation result onto the repository record contract.
///
/// Conflicts and validation failures carry their own message; anything
/// else is logged and replaced with the generic failure message.
fn mutation_record<T>(
    result: ReservaResult<Pagination<T>>,
    success_message: &str,
    failure_message: &str,
) -> RawRecord<T> {
    match result {
        Ok(pagination) => RawRecord::success(success_message, pagination),
        Err(ReservaError::Conflict(message) | ReservaError::Validation(message)) => {
            RawRecord::message(message)
        }
        Err(e) => {
            error!("{}: {}", failure_message, e);
            RawRecord::message(failure_message)
        }
    }
}
