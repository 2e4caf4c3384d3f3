//! MySQL client DAO implementation.

use crate::{dao::ClientDao, DatabasePoolInterface};
use async_trait::async_trait;
use reserva_core::{
    Client, ClientId, ClientSortKey, Crud, ListParams, Pagination, ReservaError, ReservaResult,
    ValidateExt,
};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const LIST_COUNT: &str = r#"
    SELECT COUNT(clientId)
    FROM evp_client
    WHERE document LIKE CONCAT('%', ?, '%')
"#;

const LIST_QUERY: &str = r#"
    SELECT clientId, document, documentType, firstName, surName,
           phoneNumber, mobileNumber, email
    FROM evp_client
    WHERE document LIKE CONCAT('%', ?, '%')
"#;

const ADD_COUNT: &str = r#"
    SELECT COUNT(clientId)
    FROM evp_client
    WHERE document = ?
"#;

const ADD_QUERY: &str = r#"
    INSERT INTO evp_client (
        document, documentType, firstName, surName, phoneNumber, mobileNumber, email
    ) VALUES (?, ?, ?, ?, ?, ?, ?)
"#;

const UPDATE_COUNT: &str = r#"
    SELECT COUNT(clientId)
    FROM evp_client
    WHERE document = ? AND clientId != ?
"#;

const UPDATE_QUERY: &str = r#"
    UPDATE evp_client
    SET document = ?, documentType = ?, firstName = ?, surName = ?,
        phoneNumber = ?, mobileNumber = ?, email = ?
    WHERE clientId = ?
"#;

const DELETE_QUERY: &str = r#"
    DELETE FROM evp_client
    WHERE clientId = ?
"#;

const GET_FOR_ID: &str = r#"
    SELECT clientId, document, documentType, firstName, surName,
           phoneNumber, mobileNumber, email
    FROM evp_client
    WHERE clientId = ?
"#;

/// MySQL client DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = ClientDao)]
pub struct MySqlClientDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlClientDao {
    /// Creates a new MySQL client DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a client.
#[derive(Debug, FromRow)]
struct ClientRow {
    #[sqlx(rename = "clientId")]
    client_id: i64,
    document: String,
    #[sqlx(rename = "documentType")]
    document_type: String,
    #[sqlx(rename = "firstName")]
    first_name: String,
    #[sqlx(rename = "surName")]
    sur_name: String,
    #[sqlx(rename = "phoneNumber")]
    phone_number: String,
    #[sqlx(rename = "mobileNumber")]
    mobile_number: String,
    email: String,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: ClientId::from_i64(row.client_id),
            document: row.document,
            document_type: row.document_type,
            first_name: row.first_name,
            sur_name: row.sur_name,
            phone_number: row.phone_number,
            mobile_number: row.mobile_number,
            email: row.email,
        }
    }
}

#[async_trait]
impl Crud<Client, ClientSortKey, ClientId> for MySqlClientDao {
    async fn list(&self, params: &ListParams<ClientSortKey>) -> ReservaResult<Pagination<Client>> {
        debug!("Listing clients, filter: {:?}", params.filter);

        let count: i64 = sqlx::query_scalar(LIST_COUNT)
            .bind(params.filter_value())
            .fetch_one(self.pool.inner())
            .await?;

        // The data query only runs when the count query found matches.
        if count == 0 {
            return Ok(Pagination::empty());
        }

        let query = format!("{}{}", LIST_QUERY, params.query_suffix());
        let mut data_query = sqlx::query_as::<_, ClientRow>(&query).bind(params.filter_value());
        if let Some((limit, offset)) = params.limit_offset() {
            data_query = data_query.bind(limit).bind(offset);
        }

        let rows = data_query.fetch_all(self.pool.inner()).await?;
        let clients = rows.into_iter().map(Client::from).collect();

        Ok(Pagination::new(count as u64, clients))
    }

    async fn add(
        &self,
        client: &Client,
        params: &ListParams<ClientSortKey>,
    ) -> ReservaResult<Pagination<Client>> {
        debug!("Adding client with document: {}", client.document);
        client.validate_entity()?;

        let mut tx = self.pool.inner().begin().await?;

        let existing: i64 = sqlx::query_scalar(ADD_COUNT)
            .bind(&client.document)
            .fetch_one(&mut *tx)
            .await?;

        if existing > 0 {
            tx.rollback().await?;
            return Err(ReservaError::conflict("Client already exists"));
        }

        sqlx::query(ADD_QUERY)
            .bind(&client.document)
            .bind(&client.document_type)
            .bind(&client.first_name)
            .bind(&client.sur_name)
            .bind(&client.phone_number)
            .bind(&client.mobile_number)
            .bind(&client.email)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.list(params).await
    }

    async fn update(
        &self,
        client: &Client,
        params: &ListParams<ClientSortKey>,
    ) -> ReservaResult<Pagination<Client>> {
        debug!("Updating client: {}", client.id);
        client.validate_entity()?;

        let mut tx = self.pool.inner().begin().await?;

        // Conflict check excludes the row being updated.
        let conflicting: i64 = sqlx::query_scalar(UPDATE_COUNT)
            .bind(&client.document)
            .bind(client.id.into_inner())
            .fetch_one(&mut *tx)
            .await?;

        if conflicting > 0 {
            tx.rollback().await?;
            return Err(ReservaError::conflict("Client already exists"));
        }

        sqlx::query(UPDATE_QUERY)
            .bind(&client.document)
            .bind(&client.document_type)
            .bind(&client.first_name)
            .bind(&client.sur_name)
            .bind(&client.phone_number)
            .bind(&client.mobile_number)
            .bind(&client.email)
            .bind(client.id.into_inner())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.list(params).await
    }

    async fn delete(
        &self,
        id: ClientId,
        params: &ListParams<ClientSortKey>,
    ) -> ReservaResult<Pagination<Client>> {
        debug!("Deleting client: {}", id);

        let result = sqlx::query(DELETE_QUERY)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        debug!("Deleted {} client row(s)", result.rows_affected());

        self.list(params).await
    }

    async fn get_by_id(&self, id: ClientId) -> ReservaResult<Option<Client>> {
        debug!("Finding client by id: {}", id);

        let row = sqlx::query_as::<_, ClientRow>(GET_FOR_ID)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Client::from))
    }
}

impl ClientDao for MySqlClientDao {}

impl std::fmt::Debug for MySqlClientDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlClientDao").finish_non_exhaustive()
    }
}
