//! Per-run occupancy state layered over the immutable catalog.
//!
//! [`DesignState`] records which design object currently occupies each
//! architecture entity: an interned cell name per bel, an interned net name
//! per wire and pip. It is a plain association store sized to the entity
//! counts at construction. Conflict detection (rejecting a bind to an
//! occupied slot) belongs to the placer and router, which own the mutation
//! discipline; this layer neither checks nor reports double occupancy.

use crate::chip::Chip;
use crate::ids::{BelId, PipId, WireId};
use floe_common::Ident;
use serde::{Deserialize, Serialize};

/// Mutable placement and routing occupancy for one design run.
///
/// Every slot starts unoccupied. Slot counts are fixed to the chip's entity
/// counts and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignState {
    bel_to_cell: Vec<Option<Ident>>,
    wire_to_net: Vec<Option<Ident>>,
    pip_to_net: Vec<Option<Ident>>,
}

impl DesignState {
    /// Creates an all-unoccupied state sized to the given chip.
    pub fn new(chip: &Chip) -> Self {
        Self {
            bel_to_cell: vec![None; chip.num_bels()],
            wire_to_net: vec![None; chip.num_wires()],
            pip_to_net: vec![None; chip.num_pips()],
        }
    }

    /// Records `cell` as the occupant of `bel`.
    pub fn bind_bel(&mut self, bel: BelId, cell: Ident) {
        self.bel_to_cell[bel.index()] = Some(cell);
    }

    /// Clears the occupant of `bel`.
    pub fn unbind_bel(&mut self, bel: BelId) {
        self.bel_to_cell[bel.index()] = None;
    }

    /// Returns the cell occupying `bel`, or `None` if unoccupied.
    pub fn bel_cell(&self, bel: BelId) -> Option<Ident> {
        self.bel_to_cell[bel.index()]
    }

    /// Records `net` as the occupant of `wire`.
    pub fn bind_wire(&mut self, wire: WireId, net: Ident) {
        self.wire_to_net[wire.index()] = Some(net);
    }

    /// Clears the occupant of `wire`.
    pub fn unbind_wire(&mut self, wire: WireId) {
        self.wire_to_net[wire.index()] = None;
    }

    /// Returns the net occupying `wire`, or `None` if unoccupied.
    pub fn wire_net(&self, wire: WireId) -> Option<Ident> {
        self.wire_to_net[wire.index()]
    }

    /// Records `net` as the occupant of `pip`.
    pub fn bind_pip(&mut self, pip: PipId, net: Ident) {
        self.pip_to_net[pip.index()] = Some(net);
    }

    /// Clears the occupant of `pip`.
    pub fn unbind_pip(&mut self, pip: PipId) {
        self.pip_to_net[pip.index()] = None;
    }

    /// Returns the net occupying `pip`, or `None` if unoccupied.
    pub fn pip_net(&self, pip: PipId) -> Option<Ident> {
        self.pip_to_net[pip.index()]
    }

    /// Returns the number of occupied bels.
    pub fn bound_bel_count(&self) -> usize {
        self.bel_to_cell.iter().filter(|c| c.is_some()).count()
    }
}
