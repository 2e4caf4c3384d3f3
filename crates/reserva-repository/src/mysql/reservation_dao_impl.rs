//! MySQL reservation DAO implementation.
//!
//! Reservation rows carry only foreign keys; the nested `client` and
//! `room` references are resolved through the injected DAOs, one
//! single-row lookup each per returned reservation. Each lookup acquires
//! its own pooled connection, so a page of k reservations issues 2k extra
//! queries.

use crate::{
    dao::{ClientDao, ReservationDao, RoomDao},
    DatabasePoolInterface,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use reserva_core::{
    ClientId, Crud, ListParams, Pagination, Reservation, ReservaError, ReservaResult,
    ReservationId, ReservationSortKey, RoomId, ValidateExt,
};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};

const LIST_COUNT: &str = r#"
    SELECT COUNT(eventId)
    FROM evp_event
    WHERE clientId LIKE CONCAT('%', ?, '%')
"#;

const LIST_QUERY: &str = r#"
    SELECT eventId, clientId, roomId, date, startHour, endHour, priceTotal, observations
    FROM evp_event
    WHERE clientId LIKE CONCAT('%', ?, '%')
"#;

// Legacy predicate: an existing-id check, not a business-key conflict check.
const ADD_COUNT: &str = r#"
    SELECT COUNT(eventId)
    FROM evp_event
    WHERE eventId = ?
"#;

const ADD_QUERY: &str = r#"
    INSERT INTO evp_event (
        clientId, roomId, date, startHour, endHour, priceTotal, observations
    ) VALUES (?, ?, ?, ?, ?, ?, ?)
"#;

// Legacy predicate: compares clientId, excluding the updated eventId.
const UPDATE_COUNT: &str = r#"
    SELECT COUNT(eventId)
    FROM evp_event
    WHERE clientId = ? AND eventId != ?
"#;

const UPDATE_QUERY: &str = r#"
    UPDATE evp_event
    SET clientId = ?, roomId = ?, date = ?, startHour = ?, endHour = ?,
        priceTotal = ?, observations = ?
    WHERE eventId = ?
"#;

const DELETE_QUERY: &str = r#"
    DELETE FROM evp_event
    WHERE eventId = ?
"#;

const GET_FOR_ID: &str = r#"
    SELECT eventId, clientId, roomId, date, startHour, endHour, priceTotal, observations
    FROM evp_event
    WHERE eventId = ?
"#;

/// MySQL reservation DAO implementation.
#[derive(Component)]
#[shaku(interface = ReservationDao)]
pub struct MySqlReservationDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    #[shaku(inject)]
    client_dao: Arc<dyn ClientDao>,
    #[shaku(inject)]
    room_dao: Arc<dyn RoomDao>,
}

impl MySqlReservationDao {
    /// Creates a new MySQL reservation DAO with its collaborating DAOs.
    #[must_use]
    pub fn new(
        pool: Arc<dyn DatabasePoolInterface>,
        client_dao: Arc<dyn ClientDao>,
        room_dao: Arc<dyn RoomDao>,
    ) -> Self {
        Self {
            pool,
            client_dao,
            room_dao,
        }
    }

    /// Resolves the nested client and room references for one row.
    ///
    /// A failed or absent lookup leaves the reference `None`.
    async fn hydrate(&self, row: EventRow) -> Reservation {
        let client = match self
            .client_dao
            .get_by_id(ClientId::from_i64(row.client_id))
            .await
        {
            Ok(client) => client,
            Err(e) => {
                warn!("Failed to resolve client {}: {}", row.client_id, e);
                None
            }
        };

        let room = match self.room_dao.get_by_id(RoomId::from_i64(row.room_id)).await {
            Ok(room) => room,
            Err(e) => {
                warn!("Failed to resolve room {}: {}", row.room_id, e);
                None
            }
        };

        Reservation {
            id: ReservationId::from_i64(row.event_id),
            client,
            services: Vec::new(),
            room,
            date: row.date,
            start_hour: row.start_hour,
            end_hour: row.end_hour,
            price_total: row.price_total,
            observations: row.observations,
        }
    }
}

/// Database row representation of a reservation.
#[derive(Debug, FromRow)]
struct EventRow {
    #[sqlx(rename = "eventId")]
    event_id: i64,
    #[sqlx(rename = "clientId")]
    client_id: i64,
    #[sqlx(rename = "roomId")]
    room_id: i64,
    date: NaiveDate,
    #[sqlx(rename = "startHour")]
    start_hour: i32,
    #[sqlx(rename = "endHour")]
    end_hour: i32,
    #[sqlx(rename = "priceTotal")]
    price_total: f64,
    observations: String,
}

fn require_references(reservation: &Reservation) -> ReservaResult<(ClientId, RoomId)> {
    let client = reservation
        .client
        .as_ref()
        .ok_or_else(|| ReservaError::validation("Reservation requires a client reference"))?;
    let room = reservation
        .room
        .as_ref()
        .ok_or_else(|| ReservaError::validation("Reservation requires a room reference"))?;
    Ok((client.id, room.id))
}

#[async_trait]
impl Crud<Reservation, ReservationSortKey, ReservationId> for MySqlReservationDao {
    async fn list(
        &self,
        params: &ListParams<ReservationSortKey>,
    ) -> ReservaResult<Pagination<Reservation>> {
        debug!("Listing reservations, filter: {:?}", params.filter);

        let count: i64 = sqlx::query_scalar(LIST_COUNT)
            .bind(params.filter_value())
            .fetch_one(self.pool.inner())
            .await?;

        if count == 0 {
            return Ok(Pagination::empty());
        }

        let query = format!("{}{}", LIST_QUERY, params.query_suffix());
        let mut data_query = sqlx::query_as::<_, EventRow>(&query).bind(params.filter_value());
        if let Some((limit, offset)) = params.limit_offset() {
            data_query = data_query.bind(limit).bind(offset);
        }

        let rows = data_query.fetch_all(self.pool.inner()).await?;

        let mut reservations = Vec::with_capacity(rows.len());
        for row in rows {
            reservations.push(self.hydrate(row).await);
        }

        Ok(Pagination::new(count as u64, reservations))
    }

    async fn add(
        &self,
        reservation: &Reservation,
        params: &ListParams<ReservationSortKey>,
    ) -> ReservaResult<Pagination<Reservation>> {
        debug!("Adding reservation for date: {}", reservation.date);
        reservation.validate_entity()?;
        let (client_id, room_id) = require_references(reservation)?;

        let mut tx = self.pool.inner().begin().await?;

        let existing: i64 = sqlx::query_scalar(ADD_COUNT)
            .bind(reservation.id.into_inner())
            .fetch_one(&mut *tx)
            .await?;

        if existing > 0 {
            tx.rollback().await?;
            return Err(ReservaError::conflict("Reservation already exists"));
        }

        sqlx::query(ADD_QUERY)
            .bind(client_id.into_inner())
            .bind(room_id.into_inner())
            .bind(reservation.date)
            .bind(reservation.start_hour)
            .bind(reservation.end_hour)
            .bind(reservation.price_total)
            .bind(&reservation.observations)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.list(params).await
    }

    async fn update(
        &self,
        reservation: &Reservation,
        params: &ListParams<ReservationSortKey>,
    ) -> ReservaResult<Pagination<Reservation>> {
        debug!("Updating reservation: {}", reservation.id);
        reservation.validate_entity()?;
        let (client_id, room_id) = require_references(reservation)?;

        let mut tx = self.pool.inner().begin().await?;

        let conflicting: i64 = sqlx::query_scalar(UPDATE_COUNT)
            .bind(client_id.into_inner())
            .bind(reservation.id.into_inner())
            .fetch_one(&mut *tx)
            .await?;

        if conflicting > 0 {
            tx.rollback().await?;
            return Err(ReservaError::conflict("Reservation already exists"));
        }

        sqlx::query(UPDATE_QUERY)
            .bind(client_id.into_inner())
            .bind(room_id.into_inner())
            .bind(reservation.date)
            .bind(reservation.start_hour)
            .bind(reservation.end_hour)
            .bind(reservation.price_total)
            .bind(&reservation.observations)
            .bind(reservation.id.into_inner())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.list(params).await
    }

    async fn delete(
        &self,
        id: ReservationId,
        params: &ListParams<ReservationSortKey>,
    ) -> ReservaResult<Pagination<Reservation>> {
        debug!("Deleting reservation: {}", id);

        let result = sqlx::query(DELETE_QUERY)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        debug!("Deleted {} reservation row(s)", result.rows_affected());

        self.list(params).await
    }

    async fn get_by_id(&self, id: ReservationId) -> ReservaResult<Option<Reservation>> {
        debug!("Finding reservation by id: {}", id);

        let row = sqlx::query_as::<_, EventRow>(GET_FOR_ID)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await)),
            None => Ok(None),
        }
    }
}

impl ReservationDao for MySqlReservationDao {}

impl std::fmt::Debug for MySqlReservationDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlReservationDao").finish_non_exhaustive()
    }
}
