//! Shared primitives for the floe place-and-route toolchain.
//!
//! Currently this crate provides string interning: every design-level name
//! (cell instances, nets, ports) is interned once and referred to by a compact
//! [`Ident`] for the rest of the run. Placement and routing state stores
//! `Ident`s rather than owned strings, so binding a cell to a location is a
//! plain integer write.

#![warn(missing_docs)]

pub mod ident;

pub use ident::{Ident, Interner};
