//! Integration tests for the reservation repository stack.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system. The legacy conflict
//! predicates are pinned here on purpose: neither `add` nor `update`
//! detects overlapping time slots.

mod common;

use chrono::NaiveDate;
use common::TestDatabase;
use reserva_core::{
    Client, Crud, ListParams, Pagination, Reservation, ReservationId, Room,
};
use reserva_repository::{
    ClientDao, DatabasePoolInterface, MySqlClientDao, MySqlReservationDao, MySqlRoomDao,
    ReservationRepository, ReservationRepositoryImpl, RoomDao,
};
use std::sync::Arc;

struct TestStack {
    repo: ReservationRepositoryImpl,
    client_dao: Arc<dyn ClientDao>,
    room_dao: Arc<dyn RoomDao>,
}

fn create_stack(db: &TestDatabase) -> TestStack {
    let pool: Arc<dyn DatabasePoolInterface> = db.pool();
    let client_dao: Arc<dyn ClientDao> = Arc::new(MySqlClientDao::new(Arc::clone(&pool)));
    let room_dao: Arc<dyn RoomDao> = Arc::new(MySqlRoomDao::new(Arc::clone(&pool)));
    let reservation_dao = MySqlReservationDao::new(
        pool,
        Arc::clone(&client_dao),
        Arc::clone(&room_dao),
    );
    TestStack {
        repo: ReservationRepositoryImpl::new(Arc::new(reservation_dao)),
        client_dao,
        room_dao,
    }
}

async fn seed_client(stack: &TestStack, document: &str, first_name: &str) -> Client {
    let client = Client::new(
        document.to_string(),
        "ID".to_string(),
        first_name.to_string(),
        "Ruiz".to_string(),
        "910000000".to_string(),
        "600000000".to_string(),
        format!("{}@example.com", first_name.to_lowercase()),
    );
    let listing: Pagination<Client> = stack
        .client_dao
        .add(&client, &ListParams::filtered(document))
        .await
        .expect("Failed to seed client");
    listing.data[0].clone()
}

async fn seed_room(stack: &TestStack, name: &str) -> Room {
    let room = Room::new(
        name.to_string(),
        "Main hall".to_string(),
        "Calle Mayor 1".to_string(),
        25.0,
    );
    let listing: Pagination<Room> = stack
        .room_dao
        .add(&room, &ListParams::filtered(name))
        .await
        .expect("Failed to seed room");
    listing.data[0].clone()
}

fn create_reservation(client: &Client, room: &Room, day: u32, start: i32, end: i32) -> Reservation {
    Reservation::new(
        client.clone(),
        room.clone(),
        NaiveDate::from_ymd_opt(2026, 9, day).unwrap(),
        start,
        end,
        f64::from(end - start) * room.price_per_hour,
        "Integration test".to_string(),
    )
}

#[tokio::test]
async fn test_add_and_list_resolves_client_and_room() {
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let client = seed_client(&stack, "A1", "Ana").await;
    let room = seed_room(&stack, "Aurora").await;

    let record = stack
        .repo
        .add(
            &create_reservation(&client, &room, 1, 10, 12),
            &ListParams::default(),
        )
        .await;

    assert_eq!(
        record.server_message.as_deref(),
        Some("Reservation added successfully")
    );
    let pagination = record.pagination.expect("Pagination missing");
    assert_eq!(pagination.filter_counter, 1);

    let stored = &pagination.data[0];
    assert!(stored.id.is_persisted());
    assert_eq!(stored.client.as_ref().unwrap().document, "A1");
    assert_eq!(stored.room.as_ref().unwrap().name, "Aurora");
    assert!(stored.services.is_empty());
    assert_eq!(stored.duration_hours(), 2);
}

#[tokio::test]
async fn test_list_filters_on_client_id_text() {
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let ana = seed_client(&stack, "A1", "Ana").await;
    let bea = seed_client(&stack, "B2", "Bea").await;
    let room = seed_room(&stack, "Aurora").await;

    stack
        .repo
        .add(&create_reservation(&ana, &room, 1, 10, 12), &ListParams::default())
        .await;
    stack
        .repo
        .add(&create_reservation(&bea, &room, 2, 10, 12), &ListParams::default())
        .await;

    let record = stack
        .repo
        .list(&ListParams::filtered(ana.id.into_inner().to_string()))
        .await;
    let pagination = record.pagination.expect("Pagination missing");
    assert_eq!(pagination.filter_counter, 1);
    assert_eq!(pagination.data[0].client.as_ref().unwrap().document, "A1");
}

#[tokio::test]
async fn test_overlapping_slots_are_not_rejected() {
    // The conflict predicates never compare room, date or hours, so two
    // reservations for the same room and time slot both go through.
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let ana = seed_client(&stack, "A1", "Ana").await;
    let bea = seed_client(&stack, "B2", "Bea").await;
    let room = seed_room(&stack, "Aurora").await;

    let first = stack
        .repo
        .add(&create_reservation(&ana, &room, 1, 10, 12), &ListParams::default())
        .await;
    assert_eq!(
        first.server_message.as_deref(),
        Some("Reservation added successfully")
    );

    let second = stack
        .repo
        .add(&create_reservation(&bea, &room, 1, 10, 12), &ListParams::default())
        .await;
    assert_eq!(
        second.server_message.as_deref(),
        Some("Reservation added successfully")
    );
    assert_eq!(second.pagination.unwrap().filter_counter, 2);
}

#[tokio::test]
async fn test_add_with_already_persisted_id_is_rejected() {
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let ana = seed_client(&stack, "A1", "Ana").await;
    let room = seed_room(&stack, "Aurora").await;

    let stored = stack
        .repo
        .add(&create_reservation(&ana, &room, 1, 10, 12), &ListParams::default())
        .await
        .pagination
        .unwrap()
        .data[0]
        .clone();

    // Re-sending a reservation that carries a persisted id counts as a
    // duplicate regardless of its other fields.
    let resent = create_reservation(&ana, &room, 2, 16, 18).with_id(stored.id);
    let record = stack.repo.add(&resent, &ListParams::default()).await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Reservation already exists")
    );

    let listing = stack.repo.list(&ListParams::default()).await;
    assert_eq!(listing.pagination.unwrap().filter_counter, 1);
}

#[tokio::test]
async fn test_update_sole_reservation_succeeds() {
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let ana = seed_client(&stack, "A1", "Ana").await;
    let room = seed_room(&stack, "Aurora").await;

    let stored = stack
        .repo
        .add(&create_reservation(&ana, &room, 1, 10, 12), &ListParams::default())
        .await
        .pagination
        .unwrap()
        .data[0]
        .clone();

    let mut updated = stored.clone();
    updated.observations = "Moved to the afternoon".to_string();
    updated.start_hour = 16;
    updated.end_hour = 18;
    let record = stack.repo.update(&updated, &ListParams::default()).await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Reservation updated successfully")
    );

    let found = stack
        .repo
        .get_by_id(stored.id)
        .await
        .expect("Reservation not found");
    assert_eq!(found.start_hour, 16);
    assert_eq!(found.observations, "Moved to the afternoon");
}

#[tokio::test]
async fn test_update_blocked_when_client_holds_another_reservation() {
    // The update predicate keys on the client: any other reservation held
    // by the same client blocks the write.
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let ana = seed_client(&stack, "A1", "Ana").await;
    let room = seed_room(&stack, "Aurora").await;

    stack
        .repo
        .add(&create_reservation(&ana, &room, 1, 10, 12), &ListParams::default())
        .await;
    let second = stack
        .repo
        .add(&create_reservation(&ana, &room, 2, 10, 12), &ListParams::default())
        .await
        .pagination
        .unwrap()
        .data
        .into_iter()
        .max_by_key(|r| r.id.into_inner())
        .unwrap();

    let mut updated = second.clone();
    updated.price_total = 99.0;
    let record = stack.repo.update(&updated, &ListParams::default()).await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Reservation already exists")
    );

    let found = stack
        .repo
        .get_by_id(second.id)
        .await
        .expect("Reservation not found");
    assert_eq!(found.price_total, second.price_total);
}

#[tokio::test]
async fn test_delete_reservation() {
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let ana = seed_client(&stack, "A1", "Ana").await;
    let room = seed_room(&stack, "Aurora").await;

    let stored = stack
        .repo
        .add(&create_reservation(&ana, &room, 1, 10, 12), &ListParams::default())
        .await
        .pagination
        .unwrap()
        .data[0]
        .clone();

    let record = stack.repo.delete(stored.id, &ListParams::default()).await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Reservation deleted successfully")
    );
    assert_eq!(record.pagination.unwrap().filter_counter, 0);
    assert!(stack.repo.get_by_id(stored.id).await.is_none());
}

#[tokio::test]
async fn test_dangling_client_reference_resolves_to_none() {
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let ana = seed_client(&stack, "A1", "Ana").await;
    let room = seed_room(&stack, "Aurora").await;

    let stored = stack
        .repo
        .add(&create_reservation(&ana, &room, 1, 10, 12), &ListParams::default())
        .await
        .pagination
        .unwrap()
        .data[0]
        .clone();

    // No foreign key stops the client row from disappearing.
    stack
        .client_dao
        .delete(ana.id, &ListParams::default())
        .await
        .expect("Failed to delete client");

    let found = stack
        .repo
        .get_by_id(stored.id)
        .await
        .expect("Reservation not found");
    assert!(found.client.is_none());
    assert_eq!(found.room.as_ref().unwrap().name, "Aurora");
}

#[tokio::test]
async fn test_reservation_without_client_is_rejected() {
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);
    let ana = seed_client(&stack, "A1", "Ana").await;
    let room = seed_room(&stack, "Aurora").await;

    let mut reservation = create_reservation(&ana, &room, 1, 10, 12);
    reservation.client = None;
    let record = stack.repo.add(&reservation, &ListParams::default()).await;

    assert_eq!(
        record.server_message.as_deref(),
        Some("Reservation requires a client reference")
    );
    assert!(record.pagination.is_none());
}

#[tokio::test]
async fn test_get_by_id_absent() {
    let db = TestDatabase::new().await;
    let stack = create_stack(&db);

    assert!(stack
        .repo
        .get_by_id(ReservationId::from_i64(9999))
        .await
        .is_none());
}
