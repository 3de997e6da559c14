//! Interned design names with O(1) equality and cloning.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};

/// An interned design-level name (a cell instance, net, or port name).
///
/// Internally a `u32` index into an [`Interner`]. Comparing or copying an
/// `Ident` never touches the underlying string, so placement and routing
/// state can hold millions of name references cheaply.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(u32);

impl Ident {
    /// Creates an `Ident` from a raw `u32` index.
    ///
    /// Intended for deserialization and tests. Normal code obtains idents
    /// through [`Interner::intern`].
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index of this ident.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `Ident` wraps a `u32`, which always fits in a `usize` on the
// platforms floe supports. `try_from_usize` rejects indices above `u32::MAX`.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Ident)
    }
}

/// Thread-safe string interner for design names.
///
/// One interner lives for the duration of a run. All names taken from the
/// input netlist are interned here, and the architecture overlay records
/// occupancy as `Ident`s resolved against this table.
pub struct Interner {
    rodeo: ThreadedRodeo<Ident>,
}

impl Interner {
    /// Creates a new empty interner.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Interns a string, returning its [`Ident`].
    ///
    /// Interning the same string twice returns the same ident without
    /// allocating.
    pub fn intern(&self, s: &str) -> Ident {
        self.rodeo.get_or_intern(s)
    }

    /// Returns the ident for `s` if it has already been interned.
    pub fn get(&self, s: &str) -> Option<Ident> {
        self.rodeo.get(s)
    }

    /// Resolves an [`Ident`] back to its string.
    ///
    /// # Panics
    ///
    /// Panics if the ident was not produced by this interner.
    pub fn resolve(&self, ident: Ident) -> &str {
        self.rodeo.resolve(&ident)
    }

    /// Returns the number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns whether no strings have been interned yet.
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_resolve_roundtrip() {
        let interner = Interner::new();
        let id = interner.intern("ff_state_q");
        assert_eq!(interner.resolve(id), "ff_state_q");
    }

    #[test]
    fn same_name_same_ident() {
        let interner = Interner::new();
        let a = interner.intern("clk");
        let b = interner.intern("clk");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn different_names_different_idents() {
        let interner = Interner::new();
        let a = interner.intern("data_bus[0]");
        let b = interner.intern("data_bus[1]");
        assert_ne!(a, b);
    }

    #[test]
    fn get_without_interning() {
        let interner = Interner::new();
        assert!(interner.get("rst_n").is_none());
        let id = interner.intern("rst_n");
        assert_eq!(interner.get("rst_n"), Some(id));
    }

    #[test]
    fn empty_interner() {
        let interner = Interner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.len(), 0);
    }

    #[test]
    fn serde_roundtrip() {
        let id = Ident::from_raw(17);
        let json = serde_json::to_string(&id).unwrap();
        let back: Ident = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
        assert_eq!(back.as_raw(), 17);
    }
}
