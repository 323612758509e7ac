//! Slice boundary handling: start-code search, stuffing-byte detection,
//! slice header fields, and AEC context-bank reinitialization (spec.md
//! §4.6), grounded on `check_for_slice`/`decode_slice_header` in
//! `cavsdec.c`.
//!
//! `decode_slice_header` also resets the AEC engine's in-band stuffing
//! look-back window (`BitReader::reset_aec_stuffing`) alongside the context
//! bank, since both are slice-head state in the reference decoder.

use log::{debug, trace};

use crate::aec::ContextBank;
use crate::bitreader::BitReader;
use crate::error::Result;
use crate::types::PictureType;

/// Result of a successful `decode_slice_header`: the per-slice state the
/// caller needs to seed a fresh [`ContextBank`] and a macroblock driver.
#[derive(Debug, Clone, Copy)]
pub struct SliceHeader {
    pub mb_row: u32,
    pub qp_fixed: bool,
    pub qp: u8,
    pub qp_delta_last: bool,
}

/// Scans for the next slice start code, but only at the start of a
/// macroblock row (`h->mbx == 0` in the reference decoder — start codes
/// never appear mid-row). Returns the raw `slice_start_code` byte trailing
/// `000001` if one was found and consumed, `None` otherwise (leaving the
/// reader positioned exactly where it was).
///
/// Mirrors `check_for_slice`: a slice boundary may be preceded by a single
/// `0x80` stuffing byte when the preceding slice's AEC data didn't end on
/// a byte boundary, which this detects and skips before the 3-byte
/// `0x000001` prefix.
pub fn check_for_slice(reader: &mut BitReader, at_row_start: bool) -> Result<Option<u8>> {
    if !at_row_start {
        return Ok(None);
    }

    let mut align = reader.bits_consumed().wrapping_neg() & 7;
    if align == 0 && reader.bits_left() >= 8 && reader.show_bits(8)? == 0x80 {
        align = 8;
    }

    if reader.bits_left() < 24 + align {
        return Ok(None);
    }
    if (reader.show_bits(24 + align)? & 0xFF_FFFF) != 0x0000_01 {
        return Ok(None);
    }

    reader.skip_bits(24 + align)?;
    let stc = reader.get_bits(8)? as u8;
    trace!("start code found: stc={stc:#04x}, stuffing_skipped={}", align == 8);
    Ok(Some(stc))
}

/// Parameters a caller must supply to interpret a slice start code, since
/// they come from the picture header rather than the slice itself.
#[derive(Debug, Clone, Copy)]
pub struct SliceHeaderParams {
    pub picture_type: PictureType,
    pub mb_height: u32,
    pub frame_picture: bool,
    pub pic_qp_fixed: bool,
    pub aec_enable: bool,
}

/// Decodes the fields that follow a slice start code: fixed/explicit QP,
/// the (currently unsupported) weighting-params flag, and — when AEC is
/// enabled — byte-alignment plus a full context-bank reset. Returns
/// `Ok(None)` for a start code that's out of range for this picture
/// (`h->stc >= h->mb_height * (frame ? 1 : 2)`), mirroring the guard in
/// `check_for_slice` itself rather than leaving it to the caller.
pub fn decode_slice_header(
    reader: &mut BitReader,
    ctx: &mut ContextBank,
    stc: u8,
    params: SliceHeaderParams,
) -> Result<Option<SliceHeader>> {
    let limit = if params.frame_picture {
        params.mb_height
    } else {
        params.mb_height * 2
    };
    if stc as u32 >= limit {
        return Ok(None);
    }

    let mb_row = (stc as u32) % params.mb_height;

    let (qp_fixed, qp) = if params.pic_qp_fixed {
        (true, 0u8)
    } else {
        let qp_fixed = reader.get_bit()? != 0;
        let qp = reader.get_bits(6)? as u8;
        (qp_fixed, qp)
    };

    if params.picture_type != PictureType::I || !params.frame_picture {
        let weighting = reader.get_bit()? != 0;
        if weighting {
            return Err(crate::error::CavsError::unsupported("weighted prediction"));
        }
    }

    if params.aec_enable {
        let pad = reader.align_to_byte();
        *ctx = ContextBank::new();
        reader.reset_aec_stuffing();
        debug!("slice header: mb_row={mb_row}, qp={qp}, qp_fixed={qp_fixed}, byte_align_pad={pad}");
    } else {
        debug!("slice header: mb_row={mb_row}, qp={qp}, qp_fixed={qp_fixed}");
    }

    Ok(Some(SliceHeader {
        mb_row,
        qp_fixed,
        qp,
        qp_delta_last: false,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_for_slice_skips_nothing_mid_row() {
        let data = [0x00, 0x00, 0x01, 0x05];
        let mut reader = BitReader::new(&data);
        assert_eq!(check_for_slice(&mut reader, false).unwrap(), None);
        assert_eq!(reader.bits_consumed(), 0);
    }

    #[test]
    fn check_for_slice_finds_start_code_at_row_start() {
        let data = [0x00, 0x00, 0x01, 0x05];
        let mut reader = BitReader::new(&data);
        let stc = check_for_slice(&mut reader, true).unwrap();
        assert_eq!(stc, Some(0x05));
    }

    #[test]
    fn check_for_slice_skips_leading_stuffing_byte() {
        let data = [0x80, 0x00, 0x00, 0x01, 0x07];
        let mut reader = BitReader::new(&data);
        let stc = check_for_slice(&mut reader, true).unwrap();
        assert_eq!(stc, Some(0x07));
    }

    #[test]
    fn decode_slice_header_rejects_stc_past_picture_height() {
        let data = [0u8; 4];
        let mut reader = BitReader::new(&data);
        let mut ctx = ContextBank::new();
        let params = SliceHeaderParams {
            picture_type: PictureType::I,
            mb_height: 4,
            frame_picture: true,
            pic_qp_fixed: true,
            aec_enable: false,
        };
        let header = decode_slice_header(&mut reader, &mut ctx, 9, params).unwrap();
        assert!(header.is_none());
    }

    #[test]
    fn decode_slice_header_reads_explicit_qp() {
        // bit 1 (qp_fixed=true), then 6 bits of qp = 0b010101 = 21.
        let data = [0b1010_1010u8];
        let mut reader = BitReader::new(&data);
        let mut ctx = ContextBank::new();
        let params = SliceHeaderParams {
            picture_type: PictureType::I,
            mb_height: 4,
            frame_picture: true,
            pic_qp_fixed: false,
            aec_enable: false,
        };
        let header = decode_slice_header(&mut reader, &mut ctx, 0, params)
            .unwrap()
            .unwrap();
        assert!(header.qp_fixed);
        assert_eq!(header.qp, 0b010101);
    }
}
