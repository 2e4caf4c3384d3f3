//! DAO (Data Access Object) layer.
//!
//! DAOs provide low-level, single-table data access with the typed error
//! contract: conflicts, validation rejections, and storage failures are
//! distinct [`ReservaError`](reserva_core::ReservaError) variants. The
//! repository facades in [`crate::traits`] flatten these back into the
//! message-carrying caller contract.
//!
//! Hierarchy:
//! ```text
//! Caller → Repository (RawRecord contract) → DAO (typed errors) → MySQL
//! ```

pub mod client_dao;
pub mod reservation_dao;
pub mod room_dao;

pub use client_dao::ClientDao;
pub use reservation_dao::ReservationDao;
pub use room_dao::RoomDao;
