//! `ReservationRepositoryImpl` — Repository layer implementation.

use super::{listing_record, mutation_record};
use crate::{dao::ReservationDao, traits::ReservationRepository};
use async_trait::async_trait;
use reserva_core::{ListParams, RawRecord, Reservation, ReservationId, ReservationSortKey};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error};

/// Repository implementation that orchestrates [`ReservationDao`] access.
///
/// [`ReservationDao`]: crate::dao::ReservationDao
#[derive(Component)]
#[shaku(interface = ReservationRepository)]
pub struct ReservationRepositoryImpl {
    /// Primary data access object.
    #[shaku(inject)]
    reservation_dao: Arc<dyn ReservationDao>,
}

impl ReservationRepositoryImpl {
    /// Creates a new `ReservationRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(reservation_dao: Arc<dyn ReservationDao>) -> Self {
        Self { reservation_dao }
    }
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn list(&self, params: &ListParams<ReservationSortKey>) -> RawRecord<Reservation> {
        debug!("Repository: list reservations");
        listing_record(self.reservation_dao.list(params).await)
    }

    async fn add(
        &self,
        reservation: &Reservation,
        params: &ListParams<ReservationSortKey>,
    ) -> RawRecord<Reservation> {
        debug!("Repository: add reservation for {}", reservation.date);
        mutation_record(
            self.reservation_dao.add(reservation, params).await,
            "Reservation added successfully",
            "Error adding reservation",
        )
    }

    async fn update(
        &self,
        reservation: &Reservation,
        params: &ListParams<ReservationSortKey>,
    ) -> RawRecord<Reservation> {
        debug!("Repository: update reservation {}", reservation.id);
        mutation_record(
            self.reservation_dao.update(reservation, params).await,
            "Reservation updated successfully",
            "Error updating reservation",
        )
    }

    async fn delete(
        &self,
        id: ReservationId,
        params: &ListParams<ReservationSortKey>,
    ) -> RawRecord<Reservation> {
        debug!("Repository: delete reservation {}", id);
        mutation_record(
            self.reservation_dao.delete(id, params).await,
            "Reservation deleted successfully",
            "Error deleting reservation",
        )
    }

    async fn get_by_id(&self, id: ReservationId) -> Option<Reservation> {
        debug!("Repository: get reservation {}", id);
        match self.reservation_dao.get_by_id(id).await {
            Ok(reservation) => reservation,
            Err(e) => {
                error!("Error getting reservation {}: {}", id, e);
                None
            }
        }
    }
}

impl std::fmt::Debug for ReservationRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationRepositoryImpl")
            .finish_non_exhaustive()
    }
}
