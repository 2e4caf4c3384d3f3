//! Result type aliases for Reserva.

use crate::ReservaError;

/// A specialized `Result` type for Reserva operations.
pub type ReservaResult<T> = Result<T, ReservaError>;

/// A boxed future returning a `ReservaResult`.
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = ReservaResult<T>> + Send + 'a>>;
