//! Record types of the chip database.
//!
//! These are the per-entity facts about one chip variant: bels with their
//! grid position and pin-to-wire associations, wires, and pips. Records are
//! built once by [`chipdb::build`](crate::chipdb::build) and never mutated
//! afterwards; all mutable per-run state lives in
//! [`DesignState`](crate::overlay::DesignState).

use crate::chipdb::ChipVariant;
use crate::ids::WireId;
use crate::tags::{BelKind, PortPin};
use serde::{Deserialize, Serialize};

/// One pin-to-wire association on a bel.
///
/// Lists which fabric wire a named pin of the bel attaches to. A bel's
/// association list is short (bounded by its pin count) and is searched
/// linearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BelPin {
    /// The pin tag.
    pub pin: PortPin,
    /// The wire this pin attaches to.
    pub wire: WireId,
}

/// Facts about one bel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BelData {
    /// Stable name, unique within the bel family (e.g. `X3/Y4/lc_2`).
    pub name: String,
    /// The primitive kind of this bel.
    pub kind: BelKind,
    /// Grid column.
    pub x: u32,
    /// Grid row.
    pub y: u32,
    /// Sub-index within the grid cell (logic cells stack 8 per cell,
    /// I/O pads 2 per cell).
    pub z: u32,
    /// Ordered pin-to-wire associations for this bel.
    pub pin_wires: Vec<BelPin>,
}

/// Facts about one routing wire segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireData {
    /// Stable name, unique within the wire family.
    pub name: String,
    /// Grid column of the wire's home tile.
    pub x: u32,
    /// Grid row of the wire's home tile.
    pub y: u32,
}

/// Facts about one pip (programmable connection between two wires).
///
/// Pips carry no stored name; a pip's name is derived from its position and
/// endpoint wire names by [`Chip::pip_name`](crate::chip::Chip::pip_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipData {
    /// The wire driving this pip.
    pub src: WireId,
    /// The wire this pip drives.
    pub dst: WireId,
    /// Grid column.
    pub x: u32,
    /// Grid row.
    pub y: u32,
}

/// The complete immutable database for one chip variant.
///
/// Entity counts are fixed at build time. Handles index directly into the
/// three record tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipInfo {
    /// The chip variant this database describes.
    pub variant: ChipVariant,
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// All bels, indexed by `BelId`.
    pub bels: Vec<BelData>,
    /// All wires, indexed by `WireId`.
    pub wires: Vec<WireData>,
    /// All pips, indexed by `PipId`.
    pub pips: Vec<PipData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bel_construction() {
        let bel = BelData {
            name: "X1/Y1/lc_0".to_string(),
            kind: BelKind::LogicCell,
            x: 1,
            y: 1,
            z: 0,
            pin_wires: vec![BelPin {
                pin: PortPin::I0,
                wire: WireId::from_raw(4),
            }],
        };
        assert_eq!(bel.kind, BelKind::LogicCell);
        assert_eq!(bel.pin_wires[0].pin, PortPin::I0);
        assert_eq!(bel.pin_wires[0].wire, WireId::from_raw(4));
    }

    #[test]
    fn pip_endpoints() {
        let pip = PipData {
            src: WireId::from_raw(10),
            dst: WireId::from_raw(11),
            x: 2,
            y: 3,
        };
        assert_ne!(pip.src, pip.dst);
        assert_eq!((pip.x, pip.y), (2, 3));
    }

    #[test]
    fn wire_serde_roundtrip() {
        let wire = WireData {
            name: "X2/Y3/lutff_0/in_1".to_string(),
            x: 2,
            y: 3,
        };
        let json = serde_json::to_string(&wire).unwrap();
        let back: WireData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, wire.name);
        assert_eq!((back.x, back.y), (wire.x, wire.y));
    }
}
