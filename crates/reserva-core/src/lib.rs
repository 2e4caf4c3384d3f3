//! # Reserva Core
//!
//! Core types, traits, and error definitions for the Reserva
//! room-reservation data-access layer. This crate provides the value
//! objects (entities, pagination and result wrappers), the typed error
//! taxonomy, and the generic CRUD contract implemented by the DAO layer.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod params;
pub mod record;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use params::*;
pub use record::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
