//! Shared value types for the syntax layer: picture/macroblock/block
//! classification and neighbor availability (spec.md §2, §5).

use bitflags::bitflags;

/// Picture coding type, carried in the picture header and needed to select
/// which macroblock-type table a slice uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureType {
    I,
    P,
    B,
}

/// Progressive vs top/bottom field coding (spec.md's `picture_structure`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureStructure {
    Frame,
    TopField,
    BottomField,
}

/// Subsampling of the two chroma planes relative to luma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaFormat {
    Yuv420,
}

bitflags! {
    /// Which causal neighbors of the current macroblock are available for
    /// prediction-context derivation (`A` = left, `B` = above, `C` =
    /// above-right). Unavailable at picture/slice edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NeighborAvail: u8 {
        const A_AVAIL = 0b001;
        const B_AVAIL = 0b010;
        const C_AVAIL = 0b100;
    }
}

/// Macroblock type, unified across I/P/B slices (spec.md §5.1). The
/// bitstream encodes these per slice type via `cavs_mb_aec`; this enum is
/// the decoded, type-independent representation every driver converges on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbType {
    I8x8,
    PSkip,
    P16x16,
    P16x8,
    P8x16,
    P8x8,
    BDirect,
    BFwd16x16,
    BBwd16x16,
    BSym16x16,
    B16x8,
    B8x16,
    B8x8,
}

impl MbType {
    pub fn is_intra(self) -> bool {
        matches!(self, MbType::I8x8)
    }

    pub fn is_skip(self) -> bool {
        matches!(self, MbType::PSkip | MbType::BDirect)
    }
}

/// Per-8x8-partition sub-type inside a `P_8X8`/`B_8X8` macroblock
/// (spec.md §5.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMbType {
    Direct,
    Fwd,
    Bwd,
    Sym,
    Interp,
}

/// Direction tag attached to a motion vector predictor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MvDirection {
    Forward,
    Backward,
}

/// A decoded motion vector plus the reference-picture metadata needed by
/// temporal/spatial prediction (spec.md §5.2). Pixel reconstruction itself
/// is out of scope; this is the syntax-layer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionVector {
    pub x: i16,
    pub y: i16,
    pub reference_index: i8,
    pub distance: i16,
}

/// One coded residual coefficient as produced by the run/level engine
/// before inverse-scan placement (spec.md §4.4/§4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLevel {
    pub level: i16,
    pub run: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mb_type_classification() {
        assert!(MbType::I8x8.is_intra());
        assert!(!MbType::P16x16.is_intra());
        assert!(MbType::PSkip.is_skip());
        assert!(MbType::BDirect.is_skip());
        assert!(!MbType::B8x8.is_skip());
    }

    #[test]
    fn neighbor_avail_combines() {
        let avail = NeighborAvail::A_AVAIL | NeighborAvail::B_AVAIL;
        assert!(avail.contains(NeighborAvail::A_AVAIL));
        assert!(!avail.contains(NeighborAvail::C_AVAIL));
    }
}
