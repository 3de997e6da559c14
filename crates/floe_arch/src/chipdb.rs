//! Chip database construction for the supported iCE40 variants.
//!
//! [`build`] produces the immutable [`ChipInfo`] record tables for one
//! variant. The floorplan is generated deterministically from the variant's
//! grid dimensions: an I/O ring around the edge (two pads per tile, corners
//! empty), block RAM columns spanning two rows per instance, and logic
//! tiles with eight stacked logic cells everywhere else. Names follow the
//! `X{x}/Y{y}/...` spelling used by iCE40 device databases.
//!
//! Entity order is fixed (column-major over tiles, then sub-index), so
//! handles assigned here are reproducible across runs.

use crate::ids::WireId;
use crate::tags::{BelKind, PortPin};
use crate::types::{BelData, BelPin, ChipInfo, PipData, WireData};
use crate::ArchError;
use serde::{Deserialize, Serialize};

/// The closed set of supported iCE40 chip variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ChipVariant {
    /// iCE40LP384, the smallest low-power part.
    Lp384,
    /// iCE40LP1K, low-power 1K-cell part.
    Lp1k,
    /// iCE40HX1K, high-performance 1K-cell part.
    Hx1k,
    /// iCE40UP5K, UltraPlus 5K-cell part.
    Up5k,
    /// iCE40LP8K, low-power 8K-cell part.
    Lp8k,
    /// iCE40HX8K, high-performance 8K-cell part.
    Hx8k,
}

impl ChipVariant {
    /// Every supported variant.
    pub const ALL: &'static [ChipVariant] = &[
        Self::Lp384,
        Self::Lp1k,
        Self::Hx1k,
        Self::Up5k,
        Self::Lp8k,
        Self::Hx8k,
    ];

    /// Returns the canonical lowercase name of this variant.
    pub fn as_name(self) -> &'static str {
        match self {
            Self::Lp384 => "lp384",
            Self::Lp1k => "lp1k",
            Self::Hx1k => "hx1k",
            Self::Up5k => "up5k",
            Self::Lp8k => "lp8k",
            Self::Hx8k => "hx8k",
        }
    }

    /// Resolves a variant from its canonical name.
    ///
    /// # Errors
    ///
    /// Returns [`ArchError::UnsupportedVariant`] for any other string.
    /// Callers treat this as a fatal configuration error; no chip database
    /// exists for an unsupported variant.
    pub fn from_name(name: &str) -> Result<Self, ArchError> {
        match name {
            "lp384" => Ok(Self::Lp384),
            "lp1k" => Ok(Self::Lp1k),
            "hx1k" => Ok(Self::Hx1k),
            "up5k" => Ok(Self::Up5k),
            "lp8k" => Ok(Self::Lp8k),
            "hx8k" => Ok(Self::Hx8k),
            _ => Err(ArchError::UnsupportedVariant {
                name: name.to_string(),
            }),
        }
    }

    /// Grid dimensions in tiles as `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Lp384 => (8, 9),
            Self::Lp1k | Self::Hx1k => (14, 18),
            Self::Up5k => (26, 33),
            Self::Lp8k | Self::Hx8k => (34, 33),
        }
    }

    /// Interior columns that hold block RAM instead of logic.
    fn ram_columns(self) -> &'static [u32] {
        match self {
            Self::Lp384 => &[],
            Self::Lp1k | Self::Hx1k => &[3, 10],
            Self::Up5k => &[6, 19],
            Self::Lp8k | Self::Hx8k => &[8, 25],
        }
    }
}

/// Accumulates record tables while walking the tile grid.
struct Builder {
    bels: Vec<BelData>,
    wires: Vec<WireData>,
    pips: Vec<PipData>,
}

impl Builder {
    fn new() -> Self {
        Self {
            bels: Vec::new(),
            wires: Vec::new(),
            pips: Vec::new(),
        }
    }

    fn add_wire(&mut self, name: String, x: u32, y: u32) -> WireId {
        let id = WireId::from_raw(self.wires.len() as u32);
        self.wires.push(WireData { name, x, y });
        id
    }

    fn add_pip(&mut self, src: WireId, dst: WireId, x: u32, y: u32) {
        self.pips.push(PipData { src, dst, x, y });
    }

    fn add_bel(&mut self, name: String, kind: BelKind, x: u32, y: u32, z: u32, pins: Vec<BelPin>) {
        self.bels.push(BelData {
            name,
            kind,
            x,
            y,
            z,
            pin_wires: pins,
        });
    }
}

const LC_INPUTS: [PortPin; 4] = [PortPin::I0, PortPin::I1, PortPin::I2, PortPin::I3];

/// Adds a logic tile: eight stacked logic cells with a shared clock/enable/
/// set-reset group, four horizontal span wires, and the carry chain
/// threading cell to cell.
fn add_logic_tile(b: &mut Builder, x: u32, y: u32) {
    let clk = b.add_wire(format!("X{x}/Y{y}/lutff_global/clk"), x, y);
    let cen = b.add_wire(format!("X{x}/Y{y}/lutff_global/cen"), x, y);
    let s_r = b.add_wire(format!("X{x}/Y{y}/lutff_global/s_r"), x, y);
    let span: Vec<WireId> = (0..4)
        .map(|i| b.add_wire(format!("X{x}/Y{y}/sp4_h_{i}"), x, y))
        .collect();

    let mut carry = b.add_wire(format!("X{x}/Y{y}/carry_in"), x, y);
    for z in 0..8u32 {
        let mut pins = Vec::with_capacity(10);
        for (i, &pin) in LC_INPUTS.iter().enumerate() {
            let wire = b.add_wire(format!("X{x}/Y{y}/lutff_{z}/in_{i}"), x, y);
            b.add_pip(span[i], wire, x, y);
            pins.push(BelPin { pin, wire });
        }
        let out = b.add_wire(format!("X{x}/Y{y}/lutff_{z}/out"), x, y);
        b.add_pip(out, span[(z % 4) as usize], x, y);
        pins.push(BelPin {
            pin: PortPin::O,
            wire: out,
        });
        pins.push(BelPin {
            pin: PortPin::Cin,
            wire: carry,
        });
        let cout = b.add_wire(format!("X{x}/Y{y}/lutff_{z}/cout"), x, y);
        pins.push(BelPin {
            pin: PortPin::Cout,
            wire: cout,
        });
        carry = cout;
        pins.push(BelPin {
            pin: PortPin::Clk,
            wire: clk,
        });
        pins.push(BelPin {
            pin: PortPin::Cen,
            wire: cen,
        });
        pins.push(BelPin {
            pin: PortPin::Sr,
            wire: s_r,
        });
        b.add_bel(format!("X{x}/Y{y}/lc_{z}"), BelKind::LogicCell, x, y, z, pins);
    }
}

/// Adds an I/O tile: two pads sharing the tile's clock and enable wires.
fn add_io_tile(b: &mut Builder, x: u32, y: u32) {
    let inclk = b.add_wire(format!("X{x}/Y{y}/io_global/inclk"), x, y);
    let outclk = b.add_wire(format!("X{x}/Y{y}/io_global/outclk"), x, y);
    let cen = b.add_wire(format!("X{x}/Y{y}/io_global/cen"), x, y);
    let latch = b.add_wire(format!("X{x}/Y{y}/io_global/latch"), x, y);

    for z in 0..2u32 {
        let mut pins = Vec::with_capacity(9);
        let data_pins = [
            (PortPin::DIn0, "d_in_0"),
            (PortPin::DIn1, "d_in_1"),
            (PortPin::DOut0, "d_out_0"),
            (PortPin::DOut1, "d_out_1"),
            (PortPin::OutputEnable, "oe"),
        ];
        for (pin, leaf) in data_pins {
            let wire = b.add_wire(format!("X{x}/Y{y}/io_{z}/{leaf}"), x, y);
            pins.push(BelPin { pin, wire });
        }
        pins.push(BelPin {
            pin: PortPin::InputClk,
            wire: inclk,
        });
        pins.push(BelPin {
            pin: PortPin::OutputClk,
            wire: outclk,
        });
        pins.push(BelPin {
            pin: PortPin::ClockEnable,
            wire: cen,
        });
        pins.push(BelPin {
            pin: PortPin::LatchInputValue,
            wire: latch,
        });
        b.add_bel(format!("X{x}/Y{y}/io_{z}"), BelKind::IoPad, x, y, z, pins);
    }
}

/// Adds one block RAM instance with its home tile at `(x, y)`.
///
/// The RAM occupies this tile and the one above it; geometry and placement
/// treat it as a single bel two grid rows tall.
fn add_ram_bel(b: &mut Builder, x: u32, y: u32) {
    let mut pins = Vec::with_capacity(76);
    for i in 0..16u32 {
        for (group, leaf) in [("MASK", "mask"), ("RDATA", "rdata"), ("WDATA", "wdata")] {
            let wire = b.add_wire(format!("X{x}/Y{y}/ram/{leaf}_{i}"), x, y);
            pins.push(BelPin {
                pin: PortPin::from_name(&format!("{group}_{i}")),
                wire,
            });
        }
    }
    for i in 0..11u32 {
        for (group, leaf) in [("RADDR", "raddr"), ("WADDR", "waddr")] {
            let wire = b.add_wire(format!("X{x}/Y{y}/ram/{leaf}_{i}"), x, y);
            pins.push(BelPin {
                pin: PortPin::from_name(&format!("{group}_{i}")),
                wire,
            });
        }
    }
    let control_pins = [
        (PortPin::Rclk, "rclk"),
        (PortPin::Rclke, "rclke"),
        (PortPin::Re, "re"),
        (PortPin::Wclk, "wclk"),
        (PortPin::Wclke, "wclke"),
        (PortPin::We, "we"),
    ];
    for (pin, leaf) in control_pins {
        let wire = b.add_wire(format!("X{x}/Y{y}/ram/{leaf}"), x, y);
        pins.push(BelPin { pin, wire });
    }
    b.add_bel(format!("X{x}/Y{y}/ram"), BelKind::BlockRam, x, y, 0, pins);
}

/// Builds the immutable database for one chip variant.
///
/// The result is deterministic: the same variant always yields the same
/// record tables in the same order.
pub fn build(variant: ChipVariant) -> ChipInfo {
    let (width, height) = variant.dimensions();
    let mut b = Builder::new();

    for x in 0..width {
        for y in 0..height {
            let on_x_edge = x == 0 || x == width - 1;
            let on_y_edge = y == 0 || y == height - 1;
            if on_x_edge && on_y_edge {
                // Corner tiles hold no resources.
                continue;
            }
            if on_x_edge || on_y_edge {
                add_io_tile(&mut b, x, y);
            } else if variant.ram_columns().contains(&x) {
                // RAM instances start on odd rows and span two rows; the
                // top row must stay inside the interior.
                if y % 2 == 1 && y + 2 < height {
                    add_ram_bel(&mut b, x, y);
                }
            } else {
                add_logic_tile(&mut b, x, y);
            }
        }
    }

    ChipInfo {
        variant,
        width,
        height,
        bels: b.bels,
        wires: b.wires,
        pips: b.pips,
    }
}
