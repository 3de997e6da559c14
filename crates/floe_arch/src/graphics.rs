//! Derived 2D geometry for chip entities.
//!
//! Shapes are computed on demand from a bel's kind, grid position, and
//! sub-index plus fixed per-kind layout constants. The same sequences feed
//! the interactive chip viewer and the cheap distance estimates used by
//! placement heuristics, so they must stay deterministic.

use crate::chip::Chip;
use crate::ids::{BelId, PipId, WireId};
use crate::tags::BelKind;
use serde::{Deserialize, Serialize};

/// The drawing primitive of a [`GraphicElement`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GraphicStyle {
    /// An axis-aligned filled rectangle.
    Box,
    /// A line segment.
    Line,
}

/// One shape in an entity's visual footprint, in grid units.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GraphicElement {
    /// The drawing primitive.
    pub style: GraphicStyle,
    /// Left (boxes) or start (lines) x coordinate.
    pub x1: f32,
    /// Bottom or start y coordinate.
    pub y1: f32,
    /// Right or end x coordinate.
    pub x2: f32,
    /// Top or end y coordinate.
    pub y2: f32,
    /// Drawing layer, back to front.
    pub z: f32,
}

fn box_el(x1: f32, y1: f32, x2: f32, y2: f32) -> GraphicElement {
    GraphicElement {
        style: GraphicStyle::Box,
        x1,
        y1,
        x2,
        y2,
        z: 0.0,
    }
}

fn line_el(x1: f32, y1: f32, x2: f32, y2: f32) -> GraphicElement {
    GraphicElement {
        style: GraphicStyle::Line,
        x1,
        y1,
        x2,
        y2,
        z: 0.0,
    }
}

/// Vertical pitch between the eight logic cell slots in a tile.
const LC_SLOT_PITCH: f32 = 0.8 / 8.0;

impl Chip {
    /// Returns the visual footprint of a bel.
    ///
    /// Logic cells draw as thin bars stacked eight to a tile. I/O pads on
    /// the outer boundary columns draw as wide bars split top/bottom by
    /// sub-index; pads elsewhere draw as tall bars split left/right. Block
    /// RAMs span their two grid rows.
    pub fn bel_graphics(&self, bel: BelId) -> Vec<GraphicElement> {
        let data = self.bel(bel);
        let x = data.x as f32;
        let y = data.y as f32;
        let z = data.z as f32;

        match data.kind {
            BelKind::LogicCell => {
                vec![box_el(
                    x + 0.1,
                    y + 0.10 + z * LC_SLOT_PITCH,
                    x + 0.9,
                    y + 0.18 + z * LC_SLOT_PITCH,
                )]
            }
            BelKind::IoPad => {
                let boundary_column = data.x == 0 || data.x == self.width() - 1;
                if boundary_column {
                    if data.z == 0 {
                        vec![box_el(x + 0.1, y + 0.10, x + 0.9, y + 0.45)]
                    } else {
                        vec![box_el(x + 0.1, y + 0.55, x + 0.9, y + 0.90)]
                    }
                } else if data.z == 0 {
                    vec![box_el(x + 0.10, y + 0.1, x + 0.45, y + 0.9)]
                } else {
                    vec![box_el(x + 0.55, y + 0.1, x + 0.90, y + 0.9)]
                }
            }
            BelKind::BlockRam => vec![box_el(x + 0.1, y + 0.1, x + 0.9, y + 1.9)],
            BelKind::None => Vec::new(),
        }
    }

    /// Returns the visual footprint of a wire.
    ///
    /// Routing geometry is not modeled yet; this returns an empty sequence.
    pub fn wire_graphics(&self, _wire: WireId) -> Vec<GraphicElement> {
        // TODO: draw span and local wire tracks once the viewer renders routing.
        Vec::new()
    }

    /// Returns the visual footprint of a pip.
    ///
    /// Routing geometry is not modeled yet; this returns an empty sequence.
    pub fn pip_graphics(&self, _pip: PipId) -> Vec<GraphicElement> {
        Vec::new()
    }

    /// Returns the chip frame: tick marks at every grid intersection.
    pub fn frame_graphics(&self) -> Vec<GraphicElement> {
        frame_graphics(self.width(), self.height())
    }
}

/// Returns frame tick marks for a `width` by `height` tile grid.
///
/// Every integer intersection from `(0, 0)` to `(width, height)` inclusive
/// gets one horizontal and one vertical 0.1-unit segment centered on the
/// point, `(width + 1) * (height + 1) * 2` segments in total. Pure
/// geometry, no entity lookup.
pub fn frame_graphics(width: u32, height: u32) -> Vec<GraphicElement> {
    let mut els = Vec::with_capacity(((width + 1) * (height + 1) * 2) as usize);
    for x in 0..=width {
        for y in 0..=height {
            let (xf, yf) = (x as f32, y as f32);
            els.push(line_el(xf - 0.05, yf, xf + 0.05, yf));
            els.push(line_el(xf, yf - 0.05, xf, yf + 0.05));
        }
    }
    els
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chipdb::ChipVariant;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn logic_cell_bar_is_offset_by_slot() {
        let chip = Chip::new(ChipVariant::Lp384);
        let bel = chip.bel_by_name("X3/Y4/lc_2");
        let els = chip.bel_graphics(bel);
        assert_eq!(els.len(), 1);
        let el = els[0];
        assert_eq!(el.style, GraphicStyle::Box);
        assert_close(el.x1, 3.1);
        assert_close(el.x2, 3.9);
        assert_close(el.y1, 4.30);
        assert_close(el.y2, 4.38);
    }

    #[test]
    fn logic_cell_slots_do_not_overlap() {
        let chip = Chip::new(ChipVariant::Lp384);
        let lower = chip.bel_graphics(chip.bel_by_name("X1/Y1/lc_0"))[0];
        let upper = chip.bel_graphics(chip.bel_by_name("X1/Y1/lc_1"))[0];
        assert!(lower.y2 < upper.y1 + 1e-5);
    }

    #[test]
    fn boundary_pad_is_horizontal() {
        let chip = Chip::new(ChipVariant::Lp384);
        let els = chip.bel_graphics(chip.bel_by_name("X0/Y4/io_0"));
        assert_eq!(els.len(), 1);
        let el = els[0];
        assert_close(el.x1, 0.1);
        assert_close(el.x2, 0.9);
        assert_close(el.y1, 4.10);
        assert_close(el.y2, 4.45);

        let upper = chip.bel_graphics(chip.bel_by_name("X0/Y4/io_1"))[0];
        assert_close(upper.y1, 4.55);
        assert_close(upper.y2, 4.90);
    }

    #[test]
    fn right_boundary_pad_is_horizontal_too() {
        let chip = Chip::new(ChipVariant::Lp384);
        let el = chip.bel_graphics(chip.bel_by_name("X7/Y3/io_0"))[0];
        assert_close(el.x1, 7.1);
        assert_close(el.x2, 7.9);
        assert_close(el.y1, 3.10);
        assert_close(el.y2, 3.45);
    }

    #[test]
    fn interior_pad_is_vertical() {
        let chip = Chip::new(ChipVariant::Lp384);
        let el = chip.bel_graphics(chip.bel_by_name("X3/Y0/io_1"))[0];
        assert_close(el.x1, 3.55);
        assert_close(el.x2, 3.90);
        assert_close(el.y1, 0.1);
        assert_close(el.y2, 0.9);

        let left = chip.bel_graphics(chip.bel_by_name("X3/Y0/io_0"))[0];
        assert_close(left.x1, 3.10);
        assert_close(left.x2, 3.45);
    }

    #[test]
    fn block_ram_spans_two_rows() {
        let chip = Chip::new(ChipVariant::Hx1k);
        let els = chip.bel_graphics(chip.bel_by_name("X3/Y1/ram"));
        assert_eq!(els.len(), 1);
        let el = els[0];
        assert_close(el.x1, 3.1);
        assert_close(el.x2, 3.9);
        assert_close(el.y1, 1.1);
        assert_close(el.y2, 2.9);
    }

    #[test]
    fn wire_and_pip_graphics_are_empty_placeholders() {
        let chip = Chip::new(ChipVariant::Lp384);
        assert!(chip.wire_graphics(chip.wires().next().unwrap()).is_empty());
        assert!(chip.pip_graphics(chip.pips().next().unwrap()).is_empty());
    }

    #[test]
    fn bel_graphics_is_deterministic() {
        let chip = Chip::new(ChipVariant::Lp384);
        let bel = chip.bel_by_name("X2/Y5/lc_7");
        assert_eq!(chip.bel_graphics(bel), chip.bel_graphics(bel));
    }

    #[test]
    fn frame_tick_counts() {
        assert_eq!(frame_graphics(2, 2).len(), 18);
        assert_eq!(frame_graphics(8, 8).len(), 162);

        let chip = Chip::new(ChipVariant::Lp384);
        let expected = ((chip.width() + 1) * (chip.height() + 1) * 2) as usize;
        assert_eq!(chip.frame_graphics().len(), expected);
    }

    #[test]
    fn frame_ticks_center_on_grid_points() {
        let els = frame_graphics(1, 1);
        let horizontal = els[0];
        assert_eq!(horizontal.style, GraphicStyle::Line);
        assert_close(horizontal.x1, -0.05);
        assert_close(horizontal.x2, 0.05);
        assert_close(horizontal.y1, 0.0);
        assert_close(horizontal.y2, 0.0);

        let vertical = els[1];
        assert_close(vertical.x1, 0.0);
        assert_close(vertical.x2, 0.0);
        assert_close(vertical.y1, -0.05);
        assert_close(vertical.y2, 0.05);
    }
}
