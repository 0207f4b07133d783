//! Router module.
//!
//! Provides the [`NavRouter`] registry and the [`Navigator`] / [`Registrar`]
//! capabilities it implements.

pub mod nav_router;
pub mod traits;

pub use nav_router::{Factory, NavRouter};
pub use traits::{Navigator, Registrar};
