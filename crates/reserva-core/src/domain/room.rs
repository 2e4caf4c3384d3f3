//! Room entity.

use crate::{RoomId, SortKey};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Room {
    /// Primary key (`evp_room.roomId`).
    pub id: RoomId,

    /// Display name; unique per venue.
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    /// Free-form description.
    #[validate(length(max = 512))]
    pub description: String,

    /// Street address.
    #[validate(length(max = 128))]
    pub address: String,

    /// Hourly rental price.
    #[validate(range(min = 0.0))]
    pub price_per_hour: f64,
}

impl Room {
    /// Creates a not-yet-persisted room (id 0).
    #[must_use]
    pub fn new(name: String, description: String, address: String, price_per_hour: f64) -> Self {
        Self {
            id: RoomId::default(),
            name,
            description,
            address,
            price_per_hour,
        }
    }

    /// Returns a copy with the given primary key.
    #[must_use]
    pub fn with_id(mut self, id: RoomId) -> Self {
        self.id = id;
        self
    }
}

/// Allow-listed sortable columns of `evp_room`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomSortKey {
    /// Sort by room name.
    Name,
    /// Sort by hourly price.
    PricePerHour,
}

impl SortKey for RoomSortKey {
    fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PricePerHour => "pricePerHour",
        }
    }
}
