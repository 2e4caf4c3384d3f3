//! `ClientRepositoryImpl` — Repository layer implementation.
//!
//! Implements the [`ClientRepository`] interface by delegating to a
//! [`ClientDao`] and flattening its typed errors into the message-carrying
//! record contract.
//!
//! [`ClientRepository`]: crate::traits::ClientRepository
//! [`ClientDao`]: crate::dao::ClientDao

use super::{listing_record, mutation_record};
use crate::{dao::ClientDao, traits::ClientRepository};
use async_trait::async_trait;
use reserva_core::{Client, ClientId, ClientSortKey, ListParams, RawRecord};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error};

/// Repository implementation that orchestrates [`ClientDao`] access.
///
/// [`ClientDao`]: crate::dao::ClientDao
#[derive(Component)]
#[shaku(interface = ClientRepository)]
pub struct ClientRepositoryImpl {
    /// Primary data access object.
    #[shaku(inject)]
    client_dao: Arc<dyn ClientDao>,
}

impl ClientRepositoryImpl {
    /// Creates a new `ClientRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(client_dao: Arc<dyn ClientDao>) -> Self {
        Self { client_dao }
    }
}

#[async_trait]
impl ClientRepository for ClientRepositoryImpl {
    async fn list(&self, params: &ListParams<ClientSortKey>) -> RawRecord<Client> {
        debug!("Repository: list clients");
        listing_record(self.client_dao.list(params).await)
    }

    async fn add(&self, client: &Client, params: &ListParams<ClientSortKey>) -> RawRecord<Client> {
        debug!("Repository: add client {}", client.document);
        mutation_record(
            self.client_dao.add(client, params).await,
            "Client added successfully",
            "Error adding client",
        )
    }

    async fn update(
        &self,
        client: &Client,
        params: &ListParams<ClientSortKey>,
    ) -> RawRecord<Client> {
        debug!("Repository: update client {}", client.id);
        mutation_record(
            self.client_dao.update(client, params).await,
            "Client updated successfully",
            "Error updating client",
        )
    }

    async fn delete(&self, id: ClientId, params: &ListParams<ClientSortKey>) -> RawRecord<Client> {
        debug!("Repository: delete client {}", id);
        mutation_record(
            self.client_dao.delete(id, params).await,
            "Client deleted successfully",
            "Error deleting client",
        )
    }

    async fn get_by_id(&self, id: ClientId) -> Option<Client> {
        debug!("Repository: get client {}", id);
        match self.client_dao.get_by_id(id).await {
            Ok(client) => client,
            Err(e) => {
                error!("Error getting client {}: {}", id, e);
                None
            }
        }
    }
}

impl std::fmt::Debug for ClientRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRepositoryImpl").finish_non_exhaustive()
    }
}
