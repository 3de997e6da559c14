//! iCE40 architecture catalog for the floe place-and-route toolchain.
//!
//! This crate models the fixed hardware of one chip variant as an immutable,
//! queryable database: bels (logic cells, block RAMs, I/O pads), routing
//! wires, and pips, each addressed by a dense stable handle and a canonical
//! name. On top of the database it provides the per-run occupancy overlay
//! that the placer and router mutate, and derived 2D geometry for the chip
//! viewer.
//!
//! # Usage
//!
//! ```
//! use floe_arch::{Chip, ChipVariant};
//!
//! let chip = Chip::new(ChipVariant::Hx1k);
//! let bel = chip.bel_by_name("X1/Y1/lc_0");
//! assert!(bel.is_valid());
//! assert_eq!(chip.bel_position(bel), (1, 1));
//! ```
//!
//! # Design
//!
//! - The record tables are read-only for the process lifetime; handles are
//!   never renumbered.
//! - Name lookups return the `INVALID` sentinel on a miss rather than an
//!   error, since probing for optional names is routine.
//! - The only fatal error in this crate is selecting an unsupported chip
//!   variant.

#![warn(missing_docs)]

pub mod chip;
pub mod chipdb;
pub mod graphics;
pub mod ids;
pub mod overlay;
pub mod tags;
pub mod types;

pub use chip::Chip;
pub use chipdb::ChipVariant;
pub use graphics::{GraphicElement, GraphicStyle};
pub use ids::{BelId, PipId, WireId};
pub use overlay::DesignState;
pub use tags::{BelKind, PortPin};
pub use types::{BelData, BelPin, ChipInfo, PipData, WireData};

/// Errors raised while setting up an architecture catalog.
#[derive(Debug, thiserror::Error)]
pub enum ArchError {
    /// The requested chip variant is not in the supported set.
    ///
    /// This is a configuration error, not a recoverable condition; callers
    /// abort the run with the message.
    #[error(
        "unsupported iCE40 chip variant {name:?} (supported: lp384, lp1k, hx1k, up5k, lp8k, hx8k)"
    )]
    UnsupportedVariant {
        /// The variant name that failed to resolve.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_names_the_variant() {
        let err = ArchError::UnsupportedVariant {
            name: "ecp5".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"ecp5\""));
        assert!(msg.contains("hx8k"));
    }

    #[test]
    fn public_surface_reexports() {
        let chip = Chip::new(ChipVariant::Lp384);
        let state = DesignState::new(&chip);
        assert_eq!(state.bound_bel_count(), 0);
        assert_eq!(BelKind::from_name("SB_IO"), BelKind::IoPad);
        assert_eq!(PortPin::Clk.as_name(), "CLK");
        assert!(!BelId::INVALID.is_valid());
    }
}
