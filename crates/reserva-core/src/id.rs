//! Typed ID wrappers for domain entities.
//!
//! All primary keys are MySQL `AUTO_INCREMENT` integers. Id `0` marks an
//! entity that has not been persisted yet.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw database value.
            #[must_use]
            pub const fn from_i64(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw database value.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Returns true if this ID refers to a persisted row.
            #[must_use]
            pub const fn is_persisted(self) -> bool {
                self.0 != 0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id! {
    /// A strongly-typed wrapper for client IDs (`evp_client.clientId`).
    ClientId
}

entity_id! {
    /// A strongly-typed wrapper for room IDs (`evp_room.roomId`).
    RoomId
}

entity_id! {
    /// A strongly-typed wrapper for reservation IDs (`evp_event.eventId`).
    ReservationId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ClientId::from_i64(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(ClientId::from(42), id);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ReservationId::from_i64(7).to_string(), "7");
    }

    #[test]
    fn test_unsaved_id() {
        assert!(!RoomId::default().is_persisted());
        assert!(RoomId::from_i64(1).is_persisted());
    }

    #[test]
    fn test_serde_transparent() {
        let id = ClientId::from_i64(12);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "12");
        let back: ClientId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
