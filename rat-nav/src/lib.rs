//! Navigation registry for terminal UIs.
//!
//! A [`NavRouter`] maps string keys to destination factories. Hosts register
//! destinations during setup and resolve keys whenever a navigation event
//! (a menu selection, a deep link) names one.
//!
//! # Typed keys
//!
//! [`destinations`] turns a fieldless enum into keys the router accepts:
//!
//! ```
//! use rat_nav::{destinations, NavRouter};
//!
//! #[destinations]
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Destination {
//!     Menu,
//!     #[key = "ViewA"]
//!     DetailA,
//! }
//!
//! let router = NavRouter::new();
//! router.register(Destination::DetailA, || "detail").unwrap();
//! assert_eq!(router.resolve("ViewA").unwrap(), "detail");
//! assert_eq!("Menu".parse::<Destination>(), Ok(Destination::Menu));
//! ```
//!
//! Malformed enums are rejected at compile time. Variants cannot carry fields:
//!
//! ```compile_fail
//! #[rat_nav::destinations]
//! enum Destination {
//!     Menu,
//!     Detail(u32),
//! }
//! ```
//!
//! Generic enums are not supported:
//!
//! ```compile_fail
//! #[rat_nav::destinations]
//! enum Destination<T> {
//!     Menu,
//!     Other(std::marker::PhantomData<T>),
//! }
//! ```
//!
//! A key override must not be empty:
//!
//! ```compile_fail
//! #[rat_nav::destinations]
//! enum Destination {
//!     Menu,
//!     #[key = ""]
//!     Detail,
//! }
//! ```
//!
//! Two variants cannot share a key, whether it comes from a name or an
//! override:
//!
//! ```compile_fail
//! #[rat_nav::destinations]
//! enum Destination {
//!     Menu,
//!     #[key = "Menu"]
//!     Detail,
//! }
//! ```
//!
//! The override must be a string literal:
//!
//! ```compile_fail
//! const KEY: &str = "ViewA";
//!
//! #[rat_nav::destinations]
//! enum Destination {
//!     #[key = KEY]
//!     Detail,
//! }
//! ```
//!
//! and may only be given once:
//!
//! ```compile_fail
//! #[rat_nav::destinations]
//! enum Destination {
//!     #[key = "ViewA"]
//!     #[key = "ViewB"]
//!     Detail,
//! }
//! ```

// Lets `#[destinations]` expansions refer to `::rat_nav` from inside this crate.
extern crate self as rat_nav;

pub mod error;
pub mod key;
pub mod router;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use key::{DestinationKey, ParseKeyError};
pub use rat_nav_macros::destinations;
pub use router::{Factory, NavRouter, Navigator, Registrar};
