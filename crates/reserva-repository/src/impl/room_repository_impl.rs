//! `RoomRepositoryImpl` — Repository layer implementation.

use super::{listing_record, mutation_record};
use crate::{dao::RoomDao, traits::RoomRepository};
use async_trait::async_trait;
use reserva_core::{ListParams, RawRecord, Room, RoomId, RoomSortKey};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error};

/// Repository implementation that orchestrates [`RoomDao`] access.
///
/// [`RoomDao`]: crate::dao::RoomDao
#[derive(Component)]
#[shaku(interface = RoomRepository)]
pub struct RoomRepositoryImpl {
    /// Primary data access object.
    #[shaku(inject)]
    room_dao: Arc<dyn RoomDao>,
}

impl RoomRepositoryImpl {
    /// Creates a new `RoomRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(room_dao: Arc<dyn RoomDao>) -> Self {
        Self { room_dao }
    }
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn list(&self, params: &ListParams<RoomSortKey>) -> RawRecord<Room> {
        debug!("Repository: list rooms");
        listing_record(self.room_dao.list(params).await)
    }

    async fn add(&self, room: &Room, params: &ListParams<RoomSortKey>) -> RawRecord<Room> {
        debug!("Repository: add room {}", room.name);
        mutation_record(
            self.room_dao.add(room, params).await,
            "Room added successfully",
            "Error adding room",
        )
    }

    async fn update(&self, room: &Room, params: &ListParams<RoomSortKey>) -> RawRecord<Room> {
        debug!("Repository: update room {}", room.id);
        mutation_record(
            self.room_dao.update(room, params).await,
            "Room updated successfully",
            "Error updating room",
        )
    }

    async fn delete(&self, id: RoomId, params: &ListParams<RoomSortKey>) -> RawRecord<Room> {
        debug!("Repository: delete room {}", id);
        mutation_record(
            self.room_dao.delete(id, params).await,
            "Room deleted successfully",
            "Error deleting room",
        )
    }

    async fn get_by_id(&self, id: RoomId) -> Option<Room> {
        debug!("Repository: get room {}", id);
        match self.room_dao.get_by_id(id).await {
            Ok(room) => room,
            Err(e) => {
                error!("Error getting room {}: {}", id, e);
                None
            }
        }
    }
}

impl std::fmt::Debug for RoomRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomRepositoryImpl").finish_non_exhaustive()
    }
}
