//! Integration tests for the client repository stack.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use reserva_core::{Client, ClientId, ClientSortKey, ListParams, PageRequest, Sort};
use reserva_repository::{
    ClientRepository, ClientRepositoryImpl, DatabasePoolInterface, MySqlClientDao,
};
use std::sync::Arc;

fn create_test_client(document: &str, first_name: &str, sur_name: &str) -> Client {
    Client::new(
        document.to_string(),
        "ID".to_string(),
        first_name.to_string(),
        sur_name.to_string(),
        "910000000".to_string(),
        "600000000".to_string(),
        format!("{}@example.com", first_name.to_lowercase()),
    )
}

fn create_repo(db: &TestDatabase) -> ClientRepositoryImpl {
    let pool: Arc<dyn DatabasePoolInterface> = db.pool();
    ClientRepositoryImpl::new(Arc::new(MySqlClientDao::new(pool)))
}

#[tokio::test]
async fn test_pool_health_check() {
    let db = TestDatabase::new().await;
    db.pool().health_check().await.expect("Health check failed");
}

#[tokio::test]
async fn test_add_and_list_with_filter() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    let record = repo
        .add(
            &create_test_client("A1", "Ana", "Ruiz"),
            &ListParams::filtered("A1"),
        )
        .await;

    assert_eq!(
        record.server_message.as_deref(),
        Some("Client added successfully")
    );
    let pagination = record.pagination.expect("Pagination missing");
    assert_eq!(pagination.filter_counter, 1);
    assert_eq!(pagination.data[0].first_name, "Ana");
    assert_eq!(pagination.data[0].sur_name, "Ruiz");
    assert!(pagination.data[0].id.is_persisted());
}

#[tokio::test]
async fn test_list_zero_matches_skips_data_query() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    repo.add(
        &create_test_client("A1", "Ana", "Ruiz"),
        &ListParams::default(),
    )
    .await;

    let record = repo.list(&ListParams::filtered("Z9")).await;
    assert!(record.server_message.is_none());
    let pagination = record.pagination.expect("Pagination missing");
    assert_eq!(pagination.filter_counter, 0);
    assert!(pagination.data.is_empty());
}

#[tokio::test]
async fn test_add_duplicate_document_leaves_count_unchanged() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    repo.add(
        &create_test_client("A1", "Ana", "Ruiz"),
        &ListParams::default(),
    )
    .await;

    let record = repo
        .add(
            &create_test_client("A1", "Bea", "Sanz"),
            &ListParams::default(),
        )
        .await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Client already exists")
    );
    assert!(record.pagination.is_none());

    let listing = repo.list(&ListParams::default()).await;
    assert_eq!(listing.pagination.unwrap().filter_counter, 1);
}

#[tokio::test]
async fn test_list_sorted_and_paged() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    for (document, name) in [("A1", "Ana"), ("B2", "Bea"), ("C3", "Cara")] {
        repo.add(
            &create_test_client(document, name, "Ruiz"),
            &ListParams::default(),
        )
        .await;
    }

    let params = ListParams::default()
        .with_sort(Sort::desc(ClientSortKey::Document))
        .with_page(PageRequest::new(0, 2));
    let pagination = repo.list(&params).await.pagination.expect("Pagination missing");

    // filter_counter counts all matches, not just the returned page.
    assert_eq!(pagination.filter_counter, 3);
    assert_eq!(pagination.data.len(), 2);
    assert_eq!(pagination.data[0].document, "C3");
    assert_eq!(pagination.data[1].document, "B2");

    let second_page = ListParams::default()
        .with_sort(Sort::desc(ClientSortKey::Document))
        .with_page(PageRequest::new(1, 2));
    let pagination = repo
        .list(&second_page)
        .await
        .pagination
        .expect("Pagination missing");
    assert_eq!(pagination.data.len(), 1);
    assert_eq!(pagination.data[0].document, "A1");
}

#[tokio::test]
async fn test_update_client() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    repo.add(
        &create_test_client("A1", "Ana", "Ruiz"),
        &ListParams::default(),
    )
    .await;
    let stored = repo.list(&ListParams::default()).await.pagination.unwrap().data[0].clone();

    let mut updated = stored.clone();
    updated.first_name = "Anabel".to_string();
    let record = repo.update(&updated, &ListParams::default()).await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Client updated successfully")
    );

    let found = repo.get_by_id(stored.id).await.expect("Client not found");
    assert_eq!(found.first_name, "Anabel");
}

#[tokio::test]
async fn test_update_to_taken_document_is_rejected() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    repo.add(
        &create_test_client("A1", "Ana", "Ruiz"),
        &ListParams::default(),
    )
    .await;
    repo.add(
        &create_test_client("B2", "Bea", "Sanz"),
        &ListParams::default(),
    )
    .await;

    let bea = repo
        .list(&ListParams::filtered("B2"))
        .await
        .pagination
        .unwrap()
        .data[0]
        .clone();

    let mut stolen = bea.clone();
    stolen.document = "A1".to_string();
    let record = repo.update(&stolen, &ListParams::default()).await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Client already exists")
    );

    // Bea's row is untouched.
    let found = repo.get_by_id(bea.id).await.expect("Client not found");
    assert_eq!(found.document, "B2");
}

#[tokio::test]
async fn test_update_nonexistent_id_mutates_nothing() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    repo.add(
        &create_test_client("A1", "Ana", "Ruiz"),
        &ListParams::default(),
    )
    .await;

    let ghost = create_test_client("C3", "Cara", "Vega").with_id(ClientId::from_i64(9999));
    let record = repo.update(&ghost, &ListParams::default()).await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Client updated successfully")
    );
    assert_eq!(record.pagination.unwrap().filter_counter, 1);
    assert!(repo.get_by_id(ClientId::from_i64(9999)).await.is_none());
}

#[tokio::test]
async fn test_delete_client() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    repo.add(
        &create_test_client("A1", "Ana", "Ruiz"),
        &ListParams::default(),
    )
    .await;
    let stored = repo.list(&ListParams::default()).await.pagination.unwrap().data[0].clone();

    let record = repo.delete(stored.id, &ListParams::default()).await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Client deleted successfully")
    );
    assert_eq!(record.pagination.unwrap().filter_counter, 0);
    assert!(repo.get_by_id(stored.id).await.is_none());
}

#[tokio::test]
async fn test_delete_nonexistent_id_is_a_noop() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    repo.add(
        &create_test_client("A1", "Ana", "Ruiz"),
        &ListParams::default(),
    )
    .await;

    let record = repo
        .delete(ClientId::from_i64(9999), &ListParams::default())
        .await;
    assert_eq!(
        record.server_message.as_deref(),
        Some("Client deleted successfully")
    );
    assert_eq!(record.pagination.unwrap().filter_counter, 1);
}

#[tokio::test]
async fn test_invalid_client_is_rejected_before_reaching_the_database() {
    let db = TestDatabase::new().await;
    let repo = create_repo(&db);

    let mut invalid = create_test_client("A1", "Ana", "Ruiz");
    invalid.email = "not-an-email".to_string();
    let record = repo.add(&invalid, &ListParams::default()).await;

    assert!(record.server_message.is_some());
    assert!(record.pagination.is_none());

    let listing = repo.list(&ListParams::default()).await;
    assert_eq!(listing.pagination.unwrap().filter_counter, 0);
}
