//! Decoder-wide configuration the external sequence-header parser would
//! supply (spec.md §3, SPEC_FULL.md §3.3). Parsing the sequence header
//! itself is out of scope; this crate only needs the fields below as
//! inputs to the entropy layer.

use crate::error::{CavsError, Result};
use crate::types::{ChromaFormat, PictureStructure};

/// Picture/stream-wide parameters threaded through slice and macroblock
/// decoding. Constructed once per sequence (or once per picture, for the
/// fields `cavsdec.c` re-derives per picture header).
#[derive(Debug, Clone, Copy)]
pub struct DecoderConfig {
    pub aec_enabled: bool,
    pub chroma_format: ChromaFormat,
    pub sample_depth: u8,
    pub mb_width: u32,
    pub mb_height: u32,
    pub picture_structure: PictureStructure,
    pub stream_revision: u8,
}

impl DecoderConfig {
    /// Validates the fields this crate actually constrains support to
    /// (spec.md's explicit profile restriction), rather than silently
    /// decoding a stream it would get wrong.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.chroma_format, ChromaFormat::Yuv420) {
            return Err(CavsError::unsupported("only 4:2:0 chroma is supported"));
        }
        if self.sample_depth != 8 {
            return Err(CavsError::unsupported("only 8-bit sample depth is supported"));
        }
        if self.mb_width == 0 || self.mb_height == 0 {
            return Err(CavsError::invalid("macroblock grid dimensions must be non-zero"));
        }
        Ok(())
    }

    /// Whether `decode_mb_i`'s edge-of-picture default prediction modes
    /// use `NOT_AVAIL` (stream revisions after the original JiZhun text)
    /// or `INTRA_L_LP` (the original default), per `set_intra_mode_default`.
    pub fn edge_pred_mode_is_not_avail(&self) -> bool {
        self.stream_revision > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> DecoderConfig {
        DecoderConfig {
            aec_enabled: true,
            chroma_format: ChromaFormat::Yuv420,
            sample_depth: 8,
            mb_width: 22,
            mb_height: 18,
            picture_structure: PictureStructure::Frame,
            stream_revision: 0,
        }
    }

    #[test]
    fn accepts_the_one_supported_profile() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn rejects_zero_sized_grids() {
        let mut cfg = base();
        cfg.mb_width = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn stream_revision_gates_edge_default() {
        let mut cfg = base();
        assert!(!cfg.edge_pred_mode_is_not_avail());
        cfg.stream_revision = 1;
        assert!(cfg.edge_pred_mode_is_not_avail());
    }
}
