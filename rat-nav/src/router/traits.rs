//! Capabilities exposed by a router.
//!
//! Code that only follows links depends on [`Navigator`]; setup code that
//! fills the registry depends on [`Registrar`]. [`NavRouter`](super::NavRouter)
//! implements both, and is handed to each side explicitly.

use crate::key::DestinationKey;

/// Resolves destination keys to freshly built destinations.
///
/// Dyn-compatible, so hosts can hold an `Arc<dyn Navigator<D>>`.
pub trait Navigator<D> {
    /// Build the destination registered under `key`.
    ///
    /// Fails with [`Error::KeyNotFound`](crate::Error::KeyNotFound) when
    /// nothing is registered under `key`.
    fn resolve(&self, key: &str) -> crate::Result<D>;
}

/// Adds and removes destination factories.
pub trait Registrar<D> {
    /// Store `factory` under `key`.
    ///
    /// Fails with [`Error::DuplicateKey`](crate::Error::DuplicateKey) when
    /// `key` is taken; the existing factory stays in place.
    fn register<K, F>(&self, key: K, factory: F) -> crate::Result<()>
    where
        K: Into<DestinationKey>,
        F: Fn() -> D + Send + Sync + 'static;

    /// Remove the factory under `key`. Returns `false` if there was none.
    fn unregister(&self, key: &str) -> bool;
}
