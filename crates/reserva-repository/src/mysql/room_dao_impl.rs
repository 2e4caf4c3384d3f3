//! MySQL room DAO implementation.

use crate::{dao::RoomDao, DatabasePoolInterface};
use async_trait::async_trait;
use reserva_core::{
    Crud, ListParams, Pagination, ReservaError, ReservaResult, Room, RoomId, RoomSortKey,
    ValidateExt,
};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const LIST_COUNT: &str = r#"
    SELECT COUNT(roomId)
    FROM evp_room
    WHERE name LIKE CONCAT('%', ?, '%')
"#;

const LIST_QUERY: &str = r#"
    SELECT roomId, name, description, address, pricePerHour
    FROM evp_room
    WHERE name LIKE CONCAT('%', ?, '%')
"#;

const ADD_COUNT: &str = r#"
    SELECT COUNT(roomId)
    FROM evp_room
    WHERE name = ?
"#;

const ADD_QUERY: &str = r#"
    INSERT INTO evp_room (name, description, address, pricePerHour)
    VALUES (?, ?, ?, ?)
"#;

const UPDATE_COUNT: &str = r#"
    SELECT COUNT(roomId)
    FROM evp_room
    WHERE name = ? AND roomId != ?
"#;

const UPDATE_QUERY: &str = r#"
    UPDATE evp_room
    SET name = ?, description = ?, address = ?, pricePerHour = ?
    WHERE roomId = ?
"#;

const DELETE_QUERY: &str = r#"
    DELETE FROM evp_room
    WHERE roomId = ?
"#;

const GET_FOR_ID: &str = r#"
    SELECT roomId, name, description, address, pricePerHour
    FROM evp_room
    WHERE roomId = ?
"#;

/// MySQL room DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = RoomDao)]
pub struct MySqlRoomDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlRoomDao {
    /// Creates a new MySQL room DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a room.
#[derive(Debug, FromRow)]
struct RoomRow {
    #[sqlx(rename = "roomId")]
    room_id: i64,
    name: String,
    description: String,
    address: String,
    #[sqlx(rename = "pricePerHour")]
    price_per_hour: f64,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: RoomId::from_i64(row.room_id),
            name: row.name,
            description: row.description,
            address: row.address,
            price_per_hour: row.price_per_hour,
        }
    }
}

#[async_trait]
impl Crud<Room, RoomSortKey, RoomId> for MySqlRoomDao {
    async fn list(&self, params: &ListParams<RoomSortKey>) -> ReservaResult<Pagination<Room>> {
        debug!("Listing rooms, filter: {:?}", params.filter);

        let count: i64 = sqlx::query_scalar(LIST_COUNT)
            .bind(params.filter_value())
            .fetch_one(self.pool.inner())
            .await?;

        if count == 0 {
            return Ok(Pagination::empty());
        }

        let query = format!("{}{}", LIST_QUERY, params.query_suffix());
        let mut data_query = sqlx::query_as::<_, RoomRow>(&query).bind(params.filter_value());
        if let Some((limit, offset)) = params.limit_offset() {
            data_query = data_query.bind(limit).bind(offset);
        }

        let rows = data_query.fetch_all(self.pool.inner()).await?;
        let rooms = rows.into_iter().map(Room::from).collect();

        Ok(Pagination::new(count as u64, rooms))
    }

    async fn add(
        &self,
        room: &Room,
        params: &ListParams<RoomSortKey>,
    ) -> ReservaResult<Pagination<Room>> {
        debug!("Adding room: {}", room.name);
        room.validate_entity()?;

        let mut tx = self.pool.inner().begin().await?;

        let existing: i64 = sqlx::query_scalar(ADD_COUNT)
            .bind(&room.name)
            .fetch_one(&mut *tx)
            .await?;

        if existing > 0 {
            tx.rollback().await?;
            return Err(ReservaError::conflict("Room already exists"));
        }

        sqlx::query(ADD_QUERY)
            .bind(&room.name)
            .bind(&room.description)
            .bind(&room.address)
            .bind(room.price_per_hour)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.list(params).await
    }

    async fn update(
        &self,
        room: &Room,
        params: &ListParams<RoomSortKey>,
    ) -> ReservaResult<Pagination<Room>> {
        debug!("Updating room: {}", room.id);
        room.validate_entity()?;

        let mut tx = self.pool.inner().begin().await?;

        let conflicting: i64 = sqlx::query_scalar(UPDATE_COUNT)
            .bind(&room.name)
            .bind(room.id.into_inner())
            .fetch_one(&mut *tx)
            .await?;

        if conflicting > 0 {
            tx.rollback().await?;
            return Err(ReservaError::conflict("Room already exists"));
        }

        sqlx::query(UPDATE_QUERY)
            .bind(&room.name)
            .bind(&room.description)
            .bind(&room.address)
            .bind(room.price_per_hour)
            .bind(room.id.into_inner())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.list(params).await
    }

    async fn delete(
        &self,
        id: RoomId,
        params: &ListParams<RoomSortKey>,
    ) -> ReservaResult<Pagination<Room>> {
        debug!("Deleting room: {}", id);

        let result = sqlx::query(DELETE_QUERY)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        debug!("Deleted {} room row(s)", result.rows_affected());

        self.list(params).await
    }

    async fn get_by_id(&self, id: RoomId) -> ReservaResult<Option<Room>> {
        debug!("Finding room by id: {}", id);

        let row = sqlx::query_as::<_, RoomRow>(GET_FOR_ID)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Room::from))
    }
}

impl RoomDao for MySqlRoomDao {}

impl std::fmt::Debug for MySqlRoomDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlRoomDao").finish_non_exhaustive()
    }
}
