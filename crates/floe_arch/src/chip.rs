//! The indexed chip catalog.
//!
//! [`Chip`] wraps the immutable [`ChipInfo`] record tables with handle-based
//! and name-based access. Name indices are built lazily on the first lookup
//! in each family and cached for the lifetime of the chip; most runs resolve
//! only a handful of names (pin constraints, probed wires), so eager
//! construction over tens of thousands of wires would be wasted work.

use crate::chipdb::{self, ChipVariant};
use crate::ids::{BelId, PipId, WireId};
use crate::tags::{BelKind, PortPin};
use crate::types::{BelData, ChipInfo, PipData, WireData};
use crate::ArchError;
use std::collections::HashMap;
use std::sync::OnceLock;

/// The architecture catalog for one chip variant.
///
/// All record tables are immutable after construction. The only internal
/// state created later is the three name indices, each built at most once
/// behind a [`OnceLock`], so shared references to a `Chip` are safe to use
/// from multiple threads.
#[derive(Debug)]
pub struct Chip {
    info: ChipInfo,
    bel_index: OnceLock<HashMap<String, u32>>,
    wire_index: OnceLock<HashMap<String, u32>>,
    pip_index: OnceLock<HashMap<String, u32>>,
}

impl Chip {
    /// Builds the catalog for the given chip variant.
    pub fn new(variant: ChipVariant) -> Self {
        Self {
            info: chipdb::build(variant),
            bel_index: OnceLock::new(),
            wire_index: OnceLock::new(),
            pip_index: OnceLock::new(),
        }
    }

    /// Builds the catalog for the variant with the given canonical name.
    ///
    /// # Errors
    ///
    /// Returns [`ArchError::UnsupportedVariant`] for an unknown name. This
    /// is a fatal configuration error; no catalog is constructed.
    pub fn from_variant_name(name: &str) -> Result<Self, ArchError> {
        Ok(Self::new(ChipVariant::from_name(name)?))
    }

    /// Returns the chip variant this catalog describes.
    pub fn variant(&self) -> ChipVariant {
        self.info.variant
    }

    /// Returns the grid width in tiles.
    pub fn width(&self) -> u32 {
        self.info.width
    }

    /// Returns the grid height in tiles.
    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Returns the number of bels.
    pub fn num_bels(&self) -> usize {
        self.info.bels.len()
    }

    /// Returns the number of wires.
    pub fn num_wires(&self) -> usize {
        self.info.wires.len()
    }

    /// Returns the number of pips.
    pub fn num_pips(&self) -> usize {
        self.info.pips.len()
    }

    /// Iterates over all bel handles in index order.
    pub fn bels(&self) -> impl Iterator<Item = BelId> {
        (0..self.info.bels.len() as u32).map(BelId::from_raw)
    }

    /// Iterates over all wire handles in index order.
    pub fn wires(&self) -> impl Iterator<Item = WireId> {
        (0..self.info.wires.len() as u32).map(WireId::from_raw)
    }

    /// Iterates over all pip handles in index order.
    pub fn pips(&self) -> impl Iterator<Item = PipId> {
        (0..self.info.pips.len() as u32).map(PipId::from_raw)
    }

    /// Returns the record for a bel.
    ///
    /// The handle must be valid; passing [`BelId::INVALID`] is a contract
    /// violation caught by a debug assertion.
    pub fn bel(&self, bel: BelId) -> &BelData {
        &self.info.bels[bel.index()]
    }

    /// Returns the record for a wire.
    ///
    /// The handle must be valid; passing [`WireId::INVALID`] is a contract
    /// violation caught by a debug assertion.
    pub fn wire(&self, wire: WireId) -> &WireData {
        &self.info.wires[wire.index()]
    }

    /// Returns the record for a pip.
    ///
    /// The handle must be valid; passing [`PipId::INVALID`] is a contract
    /// violation caught by a debug assertion.
    pub fn pip(&self, pip: PipId) -> &PipData {
        &self.info.pips[pip.index()]
    }

    /// Returns a bel's stable name.
    pub fn bel_name(&self, bel: BelId) -> &str {
        &self.bel(bel).name
    }

    /// Returns a bel's primitive kind.
    pub fn bel_kind(&self, bel: BelId) -> BelKind {
        self.bel(bel).kind
    }

    /// Returns a wire's stable name.
    pub fn wire_name(&self, wire: WireId) -> &str {
        &self.wire(wire).name
    }

    /// Returns a pip's derived name: `X{x}/Y{y}/{src}->{dst}`, with the
    /// endpoint wire names spelled relative to the pip's home tile.
    pub fn pip_name(&self, pip: PipId) -> String {
        let data = self.pip(pip);
        format!(
            "X{}/Y{}/{}->{}",
            data.x,
            data.y,
            self.tile_local_wire_name(data, data.src),
            self.tile_local_wire_name(data, data.dst),
        )
    }

    fn tile_local_wire_name(&self, pip: &PipData, wire: WireId) -> &str {
        let name = self.wire_name(wire);
        let prefix = format!("X{}/Y{}/", pip.x, pip.y);
        name.strip_prefix(prefix.as_str()).unwrap_or(name)
    }

    /// Resolves a bel by name.
    ///
    /// The first call builds the bel name index in a single pass; later
    /// calls are O(1) on average. Returns [`BelId::INVALID`] if no bel has
    /// this name; a miss is a routine outcome, not an error.
    pub fn bel_by_name(&self, name: &str) -> BelId {
        let index = self.bel_index.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.info.bels.len());
            for (i, bel) in self.info.bels.iter().enumerate() {
                map.insert(bel.name.clone(), i as u32);
            }
            map
        });
        index.get(name).map_or(BelId::INVALID, |&i| BelId::from_raw(i))
    }

    /// Resolves a wire by name.
    ///
    /// Same lazy-index contract as [`Chip::bel_by_name`]. Returns
    /// [`WireId::INVALID`] on a miss.
    pub fn wire_by_name(&self, name: &str) -> WireId {
        let index = self.wire_index.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.info.wires.len());
            for (i, wire) in self.info.wires.iter().enumerate() {
                map.insert(wire.name.clone(), i as u32);
            }
            map
        });
        index
            .get(name)
            .map_or(WireId::INVALID, |&i| WireId::from_raw(i))
    }

    /// Resolves a pip by its derived name.
    ///
    /// Same lazy-index contract as [`Chip::bel_by_name`]. Returns
    /// [`PipId::INVALID`] on a miss.
    pub fn pip_by_name(&self, name: &str) -> PipId {
        let index = self.pip_index.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.info.pips.len());
            for i in 0..self.info.pips.len() as u32 {
                map.insert(self.pip_name(PipId::from_raw(i)), i);
            }
            map
        });
        index.get(name).map_or(PipId::INVALID, |&i| PipId::from_raw(i))
    }

    /// Returns the wire attached to a named pin of a bel.
    ///
    /// Scans the bel's pin association list linearly; the list is bounded
    /// by the primitive's pin count. Returns [`WireId::INVALID`] if the bel
    /// has no such pin.
    pub fn wire_at_bel_pin(&self, bel: BelId, pin: PortPin) -> WireId {
        self.bel(bel)
            .pin_wires
            .iter()
            .find(|p| p.pin == pin)
            .map_or(WireId::INVALID, |p| p.wire)
    }

    /// Returns a bel's grid position.
    pub fn bel_position(&self, bel: BelId) -> (u32, u32) {
        let data = self.bel(bel);
        (data.x, data.y)
    }

    /// Returns a wire's grid position.
    pub fn wire_position(&self, wire: WireId) -> (u32, u32) {
        let data = self.wire(wire);
        (data.x, data.y)
    }

    /// Returns a pip's grid position.
    pub fn pip_position(&self, pip: PipId) -> (u32, u32) {
        let data = self.pip(pip);
        (data.x, data.y)
    }

    /// Returns the wire driving a pip.
    pub fn pip_src_wire(&self, pip: PipId) -> WireId {
        self.pip(pip).src
    }

    /// Returns the wire a pip drives.
    pub fn pip_dst_wire(&self, pip: PipId) -> WireId {
        self.pip(pip).dst
    }
}
