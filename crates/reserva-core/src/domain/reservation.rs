//! Reservation entity.

use crate::{Client, ReservationId, Room, SortKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An extra service attached to a reservation.
///
/// No DAO populates this list today; it is carried for wire compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Primary key.
    pub id: i64,
    /// Service name.
    pub name: String,
    /// Service price.
    pub price: f64,
}

/// A room reservation for a given date and hour range.
///
/// `client` and `room` are owned references resolved by separate
/// single-row lookups; either can be absent when the referenced row no
/// longer exists or the lookup failed. `start_hour < end_hour` is expected
/// but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Reservation {
    /// Primary key (`evp_event.eventId`).
    pub id: ReservationId,

    /// The booking client.
    pub client: Option<Client>,

    /// Extra services; currently never populated.
    pub services: Vec<Service>,

    /// The reserved room.
    pub room: Option<Room>,

    /// Reservation date.
    pub date: NaiveDate,

    /// Start hour (0-24).
    #[validate(range(min = 0, max = 24))]
    pub start_hour: i32,

    /// End hour (0-24).
    #[validate(range(min = 0, max = 24))]
    pub end_hour: i32,

    /// Total price for the reservation.
    #[validate(range(min = 0.0))]
    pub price_total: f64,

    /// Free-form notes.
    #[validate(length(max = 512))]
    pub observations: String,
}

impl Reservation {
    /// Creates a not-yet-persisted reservation (id 0).
    #[must_use]
    pub fn new(
        client: Client,
        room: Room,
        date: NaiveDate,
        start_hour: i32,
        end_hour: i32,
        price_total: f64,
        observations: String,
    ) -> Self {
        Self {
            id: ReservationId::default(),
            client: Some(client),
            services: Vec::new(),
            room: Some(room),
            date,
            start_hour,
            end_hour,
            price_total,
            observations,
        }
    }

    /// Returns a copy with the given primary key.
    #[must_use]
    pub fn with_id(mut self, id: ReservationId) -> Self {
        self.id = id;
        self
    }

    /// Returns the reserved duration in hours.
    #[must_use]
    pub const fn duration_hours(&self) -> i32 {
        self.end_hour - self.start_hour
    }
}

/// Allow-listed sortable columns of `evp_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationSortKey {
    /// Sort by reservation date.
    Date,
    /// Sort by start hour.
    StartHour,
    /// Sort by total price.
    PriceTotal,
}

impl SortKey for ReservationSortKey {
    fn column(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::StartHour => "startHour",
            Self::PriceTotal => "priceTotal",
        }
    }
}
