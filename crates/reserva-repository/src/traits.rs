//! Repository trait definitions.
//!
//! Repositories are the surface callers program against. Unlike the DAO
//! layer they never raise: every list or mutation answers with a
//! [`RawRecord`] whose `server_message` explains failures in caller-facing
//! terms, and whose `pagination` carries the refreshed listing when the
//! operation reached the database.

use async_trait::async_trait;
use reserva_core::{
    Client, ClientId, ClientSortKey, Interface, ListParams, RawRecord, Reservation, ReservationId,
    ReservationSortKey, Room, RoomId, RoomSortKey,
};

/// Client repository trait.
#[async_trait]
pub trait ClientRepository: Interface + Send + Sync {
    /// Lists clients matching the given filter, order and page.
    async fn list(&self, params: &ListParams<ClientSortKey>) -> RawRecord<Client>;

    /// Adds a client, then answers with the refreshed listing.
    async fn add(&self, client: &Client, params: &ListParams<ClientSortKey>) -> RawRecord<Client>;

    /// Updates a client, then answers with the refreshed listing.
    async fn update(&self, client: &Client, params: &ListParams<ClientSortKey>)
        -> RawRecord<Client>;

    /// Deletes a client by id, then answers with the refreshed listing.
    async fn delete(&self, id: ClientId, params: &ListParams<ClientSortKey>) -> RawRecord<Client>;

    /// Fetches a single client, or `None` when absent or unreachable.
    async fn get_by_id(&self, id: ClientId) -> Option<Client>;
}

/// Room repository trait.
#[async_trait]
pub trait RoomRepository: Interface + Send + Sync {
    /// Lists rooms matching the given filter, order and page.
    async fn list(&self, params: &ListParams<RoomSortKey>) -> RawRecord<Room>;

    /// Adds a room, then answers with the refreshed listing.
    async fn add(&self, room: &Room, params: &ListParams<RoomSortKey>) -> RawRecord<Room>;

    /// Updates a room, then answers with the refreshed listing.
    async fn update(&self, room: &Room, params: &ListParams<RoomSortKey>) -> RawRecord<Room>;

    /// Deletes a room by id, then answers with the refreshed listing.
    async fn delete(&self, id: RoomId, params: &ListParams<RoomSortKey>) -> RawRecord<Room>;

    /// Fetches a single room, or `None` when absent or unreachable.
    async fn get_by_id(&self, id: RoomId) -> Option<Room>;
}

/// Reservation repository trait.
#[async_trait]
pub trait ReservationRepository: Interface + Send + Sync {
    /// Lists reservations matching the given filter, order and page.
    async fn list(&self, params: &ListParams<ReservationSortKey>) -> RawRecord<Reservation>;

    /// Adds a reservation, then answers with the refreshed listing.
    async fn add(
        &self,
        reservation: &Reservation,
        params: &ListParams<ReservationSortKey>,
    ) -> RawRecord<Reservation>;

    /// Updates a reservation, then answers with the refreshed listing.
    async fn update(
        &self,
        reservation: &Reservation,
        params: &ListParams<ReservationSortKey>,
    ) -> RawRecord<Reservation>;

    /// Deletes a reservation by id, then answers with the refreshed listing.
    async fn delete(
        &self,
        id: ReservationId,
        params: &ListParams<ReservationSortKey>,
    ) -> RawRecord<Reservation>;

    /// Fetches a single reservation, or `None` when absent or unreachable.
    async fn get_by_id(&self, id: ReservationId) -> Option<Reservation>;
}
