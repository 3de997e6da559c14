//! Opaque handle newtypes for architecture entities.
//!
//! Each handle is a dense, zero-based `u32` index into one family of the
//! chip database (bels, wires, or pips), plus a reserved [`INVALID`]
//! sentinel that compares unequal to every valid handle. Handles are
//! assigned once when the database is built and stay stable for the
//! lifetime of the process.
//!
//! [`INVALID`]: BelId::INVALID

use serde::{Deserialize, Serialize};

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// The invalid/unset sentinel.
            ///
            /// Returned by name and pin lookups that find nothing. Compares
            /// unequal to every valid handle and must never be used to
            /// access a database record.
            pub const INVALID: Self = Self(u32::MAX);

            /// Creates a handle from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }

            /// Returns whether this handle refers to an entity.
            pub fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }

            /// Converts the handle to a `usize` index into its family's
            /// record table.
            ///
            /// Calling this on [`Self::INVALID`] is a caller contract
            /// violation, caught by a debug assertion.
            pub fn index(self) -> usize {
                debug_assert!(
                    self.is_valid(),
                    concat!("attempted to index with ", stringify!($name), "::INVALID"),
                );
                self.0 as usize
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

define_handle!(
    /// Handle for a bel (basic element: logic cell, block RAM, or I/O pad).
    BelId
);

define_handle!(
    /// Handle for a routing wire segment.
    WireId
);

define_handle!(
    /// Handle for a pip (programmable interconnect point between two wires).
    PipId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn raw_roundtrip() {
        let id = BelId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn equality() {
        let a = WireId::from_raw(7);
        let b = WireId::from_raw(7);
        let c = WireId::from_raw(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn invalid_is_distinct_from_every_valid_handle() {
        assert!(!PipId::INVALID.is_valid());
        assert_ne!(PipId::INVALID, PipId::from_raw(0));
        assert_ne!(PipId::INVALID, PipId::from_raw(u32::MAX - 1));
        assert!(PipId::from_raw(0).is_valid());
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(BelId::default(), BelId::INVALID);
        assert_eq!(WireId::default(), WireId::INVALID);
        assert_eq!(PipId::default(), PipId::INVALID);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "INVALID")]
    fn indexing_with_invalid_panics_in_debug() {
        let _ = BelId::INVALID.index();
    }

    #[test]
    fn hash_in_set() {
        let mut set = HashSet::new();
        set.insert(WireId::from_raw(1));
        set.insert(WireId::from_raw(2));
        set.insert(WireId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ordering_follows_raw_index() {
        assert!(BelId::from_raw(3) < BelId::from_raw(4));
        assert!(BelId::from_raw(4) < BelId::INVALID);
    }

    #[test]
    fn serde_roundtrip() {
        let id = PipId::from_raw(99);
        let json = serde_json::to_string(&id).unwrap();
        let restored: PipId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }
}
