//! Closed tag enumerations and their canonical-name codecs.
//!
//! Two tag families exist: [`BelKind`] discriminates the handful of bel
//! primitives in the iCE40 fabric, and [`PortPin`] names every connection
//! point a bel can expose. Each enumeration and both directions of its
//! string mapping are emitted from a single list, so the three can never
//! drift apart.
//!
//! Name resolution is total: an unknown string maps to the `None` sentinel
//! and the sentinel maps to the empty string. Matching is case-sensitive
//! with no normalization.

use serde::{Deserialize, Serialize};

macro_rules! define_tags {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        #[allow(missing_docs)]
        pub enum $name {
            /// Sentinel for "no tag". Resolves to the empty string.
            None,
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every tag in the enumeration, excluding the `None` sentinel.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// Returns the canonical spelling of this tag.
            ///
            /// The `None` sentinel spells as the empty string.
            pub fn as_name(self) -> &'static str {
                match self {
                    Self::None => "",
                    $(Self::$variant => $text,)+
                }
            }

            /// Resolves a canonical spelling back to its tag.
            ///
            /// Any string outside the enumeration, including the empty
            /// string, yields the `None` sentinel. This never fails.
            pub fn from_name(name: &str) -> Self {
                match name {
                    $($text => Self::$variant,)+
                    _ => Self::None,
                }
            }
        }
    };
}

define_tags!(
    /// The primitive kind of a bel.
    ///
    /// Canonical spellings follow the names used by synthesis netlists for
    /// iCE40 primitives.
    BelKind {
        /// A logic cell (4-input LUT, flip-flop, carry logic).
        LogicCell => "ICESTORM_LC",
        /// A 4Kbit block RAM spanning two grid rows.
        BlockRam => "ICESTORM_RAM",
        /// An I/O pad connecting to a package pin.
        IoPad => "SB_IO",
    }
);

define_tags!(
    /// A named connection point (port pin) on a bel.
    ///
    /// Covers logic cell, block RAM, I/O pad, global buffer, and PLL pins.
    PortPin {
        // ICESTORM_LC
        I0 => "I0",
        I1 => "I1",
        I2 => "I2",
        I3 => "I3",
        O => "O",
        Lo => "LO",
        Cin => "CIN",
        Cout => "COUT",
        Cen => "CEN",
        Clk => "CLK",
        Sr => "SR",
        // ICESTORM_RAM
        Mask0 => "MASK_0",
        Mask1 => "MASK_1",
        Mask2 => "MASK_2",
        Mask3 => "MASK_3",
        Mask4 => "MASK_4",
        Mask5 => "MASK_5",
        Mask6 => "MASK_6",
        Mask7 => "MASK_7",
        Mask8 => "MASK_8",
        Mask9 => "MASK_9",
        Mask10 => "MASK_10",
        Mask11 => "MASK_11",
        Mask12 => "MASK_12",
        Mask13 => "MASK_13",
        Mask14 => "MASK_14",
        Mask15 => "MASK_15",
        Rdata0 => "RDATA_0",
        Rdata1 => "RDATA_1",
        Rdata2 => "RDATA_2",
        Rdata3 => "RDATA_3",
        Rdata4 => "RDATA_4",
        Rdata5 => "RDATA_5",
        Rdata6 => "RDATA_6",
        Rdata7 => "RDATA_7",
        Rdata8 => "RDATA_8",
        Rdata9 => "RDATA_9",
        Rdata10 => "RDATA_10",
        Rdata11 => "RDATA_11",
        Rdata12 => "RDATA_12",
        Rdata13 => "RDATA_13",
        Rdata14 => "RDATA_14",
        Rdata15 => "RDATA_15",
        Wdata0 => "WDATA_0",
        Wdata1 => "WDATA_1",
        Wdata2 => "WDATA_2",
        Wdata3 => "WDATA_3",
        Wdata4 => "WDATA_4",
        Wdata5 => "WDATA_5",
        Wdata6 => "WDATA_6",
        Wdata7 => "WDATA_7",
        Wdata8 => "WDATA_8",
        Wdata9 => "WDATA_9",
        Wdata10 => "WDATA_10",
        Wdata11 => "WDATA_11",
        Wdata12 => "WDATA_12",
        Wdata13 => "WDATA_13",
        Wdata14 => "WDATA_14",
        Wdata15 => "WDATA_15",
        Waddr0 => "WADDR_0",
        Waddr1 => "WADDR_1",
        Waddr2 => "WADDR_2",
        Waddr3 => "WADDR_3",
        Waddr4 => "WADDR_4",
        Waddr5 => "WADDR_5",
        Waddr6 => "WADDR_6",
        Waddr7 => "WADDR_7",
        Waddr8 => "WADDR_8",
        Waddr9 => "WADDR_9",
        Waddr10 => "WADDR_10",
        Raddr0 => "RADDR_0",
        Raddr1 => "RADDR_1",
        Raddr2 => "RADDR_2",
        Raddr3 => "RADDR_3",
        Raddr4 => "RADDR_4",
        Raddr5 => "RADDR_5",
        Raddr6 => "RADDR_6",
        Raddr7 => "RADDR_7",
        Raddr8 => "RADDR_8",
        Raddr9 => "RADDR_9",
        Raddr10 => "RADDR_10",
        Wclk => "WCLK",
        Wclke => "WCLKE",
        We => "WE",
        Rclk => "RCLK",
        Rclke => "RCLKE",
        Re => "RE",
        // SB_IO
        PackagePin => "PACKAGE_PIN",
        LatchInputValue => "LATCH_INPUT_VALUE",
        ClockEnable => "CLOCK_ENABLE",
        InputClk => "INPUT_CLK",
        OutputClk => "OUTPUT_CLK",
        OutputEnable => "OUTPUT_ENABLE",
        DOut0 => "D_OUT_0",
        DOut1 => "D_OUT_1",
        DIn0 => "D_IN_0",
        DIn1 => "D_IN_1",
        // SB_GB
        GlobalBufferOutput => "GLOBAL_BUFFER_OUTPUT",
        UserSignalToGlobalBuffer => "USER_SIGNAL_TO_GLOBAL_BUFFER",
        // SB_PLL40
        ReferenceClk => "REFERENCECLK",
        ExtFeedback => "EXTFEEDBACK",
        DynamicDelay0 => "DYNAMICDELAY_0",
        DynamicDelay1 => "DYNAMICDELAY_1",
        DynamicDelay2 => "DYNAMICDELAY_2",
        DynamicDelay3 => "DYNAMICDELAY_3",
        DynamicDelay4 => "DYNAMICDELAY_4",
        DynamicDelay5 => "DYNAMICDELAY_5",
        DynamicDelay6 => "DYNAMICDELAY_6",
        DynamicDelay7 => "DYNAMICDELAY_7",
        Lock => "LOCK",
        Bypass => "BYPASS",
        ResetB => "RESETB",
        Sdi => "SDI",
        Sdo => "SDO",
        Sclk => "SCLK",
        PllOutA => "PLLOUT_A",
        PllOutB => "PLLOUT_B",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bel_kind_roundtrip() {
        for &kind in BelKind::ALL {
            assert_eq!(BelKind::from_name(kind.as_name()), kind);
        }
    }

    #[test]
    fn bel_kind_names() {
        assert_eq!(BelKind::LogicCell.as_name(), "ICESTORM_LC");
        assert_eq!(BelKind::BlockRam.as_name(), "ICESTORM_RAM");
        assert_eq!(BelKind::IoPad.as_name(), "SB_IO");
        assert_eq!(BelKind::None.as_name(), "");
    }

    #[test]
    fn bel_kind_unknown_is_none() {
        assert_eq!(BelKind::from_name("SLICEL"), BelKind::None);
        assert_eq!(BelKind::from_name(""), BelKind::None);
    }

    #[test]
    fn bel_kind_match_is_case_sensitive() {
        assert_eq!(BelKind::from_name("icestorm_lc"), BelKind::None);
        assert_eq!(BelKind::from_name("Sb_Io"), BelKind::None);
    }

    #[test]
    fn port_pin_roundtrip() {
        for &pin in PortPin::ALL {
            assert_eq!(PortPin::from_name(pin.as_name()), pin);
        }
    }

    #[test]
    fn port_pin_names_are_distinct() {
        let names: HashSet<&str> = PortPin::ALL.iter().map(|p| p.as_name()).collect();
        assert_eq!(names.len(), PortPin::ALL.len());
        assert!(!names.contains(""));
    }

    #[test]
    fn port_pin_covers_all_primitive_families() {
        assert!(PortPin::ALL.len() > 100);
        assert_eq!(PortPin::from_name("I2"), PortPin::I2);
        assert_eq!(PortPin::from_name("RDATA_15"), PortPin::Rdata15);
        assert_eq!(PortPin::from_name("WADDR_10"), PortPin::Waddr10);
        assert_eq!(PortPin::from_name("D_IN_1"), PortPin::DIn1);
        assert_eq!(PortPin::from_name("PLLOUT_B"), PortPin::PllOutB);
    }

    #[test]
    fn port_pin_unknown_is_none() {
        assert_eq!(PortPin::from_name("RDATA_16"), PortPin::None);
        assert_eq!(PortPin::from_name("i0"), PortPin::None);
        assert_eq!(PortPin::from_name(""), PortPin::None);
        assert_eq!(PortPin::None.as_name(), "");
    }

    #[test]
    fn tags_serde_roundtrip() {
        let kind = BelKind::BlockRam;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(serde_json::from_str::<BelKind>(&json).unwrap(), kind);

        let pin = PortPin::Waddr7;
        let json = serde_json::to_string(&pin).unwrap();
        assert_eq!(serde_json::from_str::<PortPin>(&json).unwrap(), pin);
    }
}
