//! # Reserva Repository
//!
//! Data-access hierarchy for clients, rooms and reservations:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn ClientRepository>   (record contract — never raises)
//! ClientRepositoryImpl             (repository impl — flattens errors)
//!   ↓  Arc<dyn ClientDao>          (DAO interface — typed errors)
//! MySqlClientDao                   (DAO impl — MySQL / SQLx)
//!   ↓
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                      ← ClientRepository / RoomRepository /
//!                                    ReservationRepository traits
//!   impl/
//!     client_repository_impl.rs    ← record-contract facades
//!     room_repository_impl.rs
//!     reservation_repository_impl.rs
//!   dao/
//!     client_dao.rs                ← DAO traits
//!     room_dao.rs
//!     reservation_dao.rs
//!   mysql/
//!     client_dao_impl.rs           ← MySQL DAO implementations
//!     room_dao_impl.rs
//!     reservation_dao_impl.rs
//!   pool.rs                        ← connection pool + migrations
//! ```
//!
//! Every listing runs a `COUNT` first and only fetches rows when matches
//! exist; every mutation answers with the refreshed listing for the same
//! filter, order and page.

pub mod dao;
pub mod r#impl;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use dao::{ClientDao, ReservationDao, RoomDao};
pub use pool::*;
pub use r#impl::{ClientRepositoryImpl, ReservationRepositoryImpl, RoomRepositoryImpl};
pub use traits::*;

// Re-export MySQL implementations for convenience
pub use mysql::*;
