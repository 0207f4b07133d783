//! Destination keys.
//!
//! A [`DestinationKey`] is an opaque, non-empty string. Keys are compared
//! exactly: no trimming, case folding or aliasing ever happens, so `"ViewA"`
//! and `"viewa"` name different destinations.

use snafu::prelude::*;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

/// Error produced when a string cannot be turned into a destination key.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum ParseKeyError {
    #[snafu(display("destination key must not be empty"))]
    Empty,

    #[snafu(display(
        "unknown destination '{input}'. Available: {}",
        available.join(", ")
    ))]
    Unrecognized {
        input: String,
        available: Vec<&'static str>,
    },
}

/// Identifier a destination is registered under.
///
/// Cloning is cheap: the text is shared.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DestinationKey(Arc<str>);

impl DestinationKey {
    /// Create a key, rejecting the empty string.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ParseKeyError> {
        let key = key.as_ref();
        ensure!(!key.is_empty(), EmptySnafu);
        Ok(Self(Arc::from(key)))
    }

    /// Used by `#[destinations]`, which checks for empty keys at compile time.
    #[doc(hidden)]
    pub fn __from_static(key: &'static str) -> Self {
        debug_assert!(!key.is_empty(), "destination keys are never empty");
        Self(Arc::from(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DestinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DestinationKey({:?})", &*self.0)
    }
}

impl fmt::Display for DestinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for DestinationKey {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DestinationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the registry look entries up by `&str` without allocating a key.
impl Borrow<str> for DestinationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for DestinationKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for DestinationKey {
    type Error = ParseKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for DestinationKey {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ensure!(!value.is_empty(), EmptySnafu);
        Ok(Self(Arc::from(value)))
    }
}

impl PartialEq<str> for DestinationKey {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for DestinationKey {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
