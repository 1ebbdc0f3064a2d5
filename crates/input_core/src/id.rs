//! Opaque identifier for text fields.
//!
//! A plain `u64` keeps the store independent from whatever node id type the
//! host markup layer uses. Integration layers convert at the boundary.

use std::fmt;

/// Handle naming one text field within an [`InputValueStore`](crate::InputValueStore).
///
/// The raw value carries no meaning inside this crate; it is just a key.
/// Ordering follows the raw value, which lets hosts iterate fields in
/// document order when ids are assigned in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<usize> for InputId {
    #[inline]
    fn from(raw: usize) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input#{}", self.0)
    }
}
