//! MySQL DAO implementations.

mod client_dao_impl;
mod reservation_dao_impl;
mod room_dao_impl;

pub use client_dao_impl::MySqlClientDao;
pub use reservation_dao_impl::MySqlReservationDao;
pub use room_dao_impl::MySqlRoomDao;
