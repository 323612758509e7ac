//! MSB-first bit-level reader over a borrowed byte slice.
//!
//! This is the byte-stream-agnostic leaf of the decoder (spec.md §2.1): it
//! knows nothing about macroblocks, slices, or AEC — it just exposes raw
//! bit/exp-Golomb reads and bit-count introspection. The AEC engine reads
//! through the same reader for its initial/refill bits, so the two entropy
//! paths share one cursor.

use bitvec::prelude::*;

use crate::error::{CavsError, Result};

type Bits<'a> = &'a BitSlice<u8, Msb0>;

/// Mask over the bottom 22 bits of the AEC in-band stuffing look-back
/// window (`0x3FFFFF` in the reference decoder).
const STUFFING_WINDOW_MASK: u32 = 0x3F_FFFF;

/// A read-only cursor over a bitstream, borrowed for its whole lifetime.
pub struct BitReader<'a> {
    bits: Bits<'a>,
    pos: usize,
    /// Rolling look-back window over bits consumed on the AEC path, used
    /// to detect in-band stuffing codes (spec.md §4.6, §9). Only
    /// [`Self::get_bits_aec`]/[`Self::get_bit_aec`] update this; ordinary
    /// header/VLC reads leave it untouched.
    aec_shift_reg: u32,
}

impl<'a> BitReader<'a> {
    /// Wraps `data` for bit-level reading, starting at bit 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            bits: BitSlice::from_slice(data),
            pos: 0,
            aec_shift_reg: 0xFF_FFFF,
        }
    }

    /// Number of bits already consumed.
    pub fn bits_consumed(&self) -> usize {
        self.pos
    }

    /// Number of bits remaining in the stream.
    pub fn bits_left(&self) -> usize {
        self.bits.len().saturating_sub(self.pos)
    }

    fn take(&mut self, n: usize) -> Result<u32> {
        if n == 0 {
            return Ok(0);
        }
        if self.pos + n > self.bits.len() {
            return Err(CavsError::NeedMoreData);
        }
        let slice = &self.bits[self.pos..self.pos + n];
        let value = slice.load_be::<u32>();
        self.pos += n;
        Ok(value)
    }

    /// Reads and consumes `n` (0..=32) bits, MSB-first.
    pub fn get_bits(&mut self, n: usize) -> Result<u32> {
        self.take(n)
    }

    /// Reads 1 bit and consumes it.
    pub fn get_bit(&mut self) -> Result<u32> {
        self.take(1)
    }

    /// Peeks at the next `n` bits without consuming them.
    pub fn show_bits(&self, n: usize) -> Result<u32> {
        if self.pos + n > self.bits.len() {
            return Err(CavsError::NeedMoreData);
        }
        Ok(self.bits[self.pos..self.pos + n].load_be::<u32>())
    }

    /// Skips `n` bits without returning them.
    pub fn skip_bits(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    /// Advances to the next byte boundary, returning the number of padding
    /// bits skipped (0..=7). Used at slice heads (spec.md §4.6).
    pub fn align_to_byte(&mut self) -> usize {
        let pad = (8 - (self.pos % 8)) % 8;
        self.pos += pad;
        pad
    }

    /// Resets the AEC in-band stuffing look-back window. Called at each
    /// slice head, alongside the context-bank reset (mirrors the
    /// reference's `buf = 0xFFFFFF` static initializer).
    pub fn reset_aec_stuffing(&mut self) {
        self.aec_shift_reg = 0xFF_FFFF;
    }

    /// Reads `n` bits for the AEC engine, first skipping an in-band
    /// stuffing code if one is present (mirrors `dbg_get_bits`): when the
    /// low 22 bits of the look-back window are all zero and the reader
    /// sits at bit-offset 2 mod 8 and the next two bits read `10`, those
    /// two bits are consumed and the window is reset before the real read
    /// proceeds. Every bit the AEC engine consumes — init, renormalization,
    /// bypass — must go through this (or [`Self::get_bit_aec`]) rather than
    /// the plain `get_bits`/`get_bit`, since only AEC-path bits feed the
    /// window.
    pub fn get_bits_aec(&mut self, n: usize) -> Result<u32> {
        if self.aec_shift_reg & STUFFING_WINDOW_MASK == 0 {
            let align = (8 - (self.pos % 8)) % 8;
            if align == 2 && self.show_bits(2).unwrap_or(0) == 0b10 {
                self.take(2)?;
                self.aec_shift_reg = 0xFF_FFFF;
            }
        }
        let value = self.take(n)?;
        self.aec_shift_reg = (self.aec_shift_reg << n) | value;
        Ok(value)
    }

    /// `get_bits_aec(1)`.
    pub fn get_bit_aec(&mut self) -> Result<u32> {
        self.get_bits_aec(1)
    }

    /// 0th-order unsigned exp-Golomb: a run of `k` zero bits, a `1` bit,
    /// then `k` more bits giving the value `(1 << k) - 1 + suffix`.
    pub fn get_ue_golomb(&mut self) -> Result<u32> {
        let mut leading_zeros = 0u32;
        while self.get_bit()? == 0 {
            leading_zeros += 1;
            if leading_zeros > 31 {
                return Err(CavsError::invalid("exp-Golomb prefix too long"));
            }
        }
        if leading_zeros == 0 {
            return Ok(0);
        }
        let suffix = self.get_bits(leading_zeros as usize)?;
        Ok((1u32 << leading_zeros) - 1 + suffix)
    }

    /// Signed exp-Golomb: maps the unsigned code `k` to `(-1)^(k+1) *
    /// ceil(k/2)`, i.e. 0,1,-1,2,-2,...
    pub fn get_se_golomb(&mut self) -> Result<i32> {
        let code = self.get_ue_golomb()? as i64;
        let value = if code % 2 == 0 { -(code / 2) } else { (code + 1) / 2 };
        Ok(value as i32)
    }

    /// `k`-th order exp-Golomb (spec.md §4.4): a 0th-order code shifted left
    /// by `order`, with `order` raw bits appended as the low-order suffix.
    pub fn get_ue_code(&mut self, order: u32) -> Result<u32> {
        let ret = self.get_ue_golomb()?;
        if ret >= (1u32 << 31) >> order {
            return Err(CavsError::invalid("get_ue_code: value too large"));
        }
        if order == 0 {
            return Ok(ret);
        }
        let suffix = self.get_bits(order as usize)?;
        Ok((ret << order) + suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_bits_reads_msb_first() {
        let data = [0b1010_0000];
        let mut r = BitReader::new(&data);
        assert_eq!(r.get_bits(4).unwrap(), 0b1010);
        assert_eq!(r.get_bits(4).unwrap(), 0b0000);
    }

    #[test]
    fn show_bits_does_not_consume() {
        let data = [0xFF];
        let r_data = data;
        let mut r = BitReader::new(&r_data);
        assert_eq!(r.show_bits(4).unwrap(), 0b1111);
        assert_eq!(r.get_bits(4).unwrap(), 0b1111);
    }

    #[test]
    fn align_to_byte_skips_remaining_bits() {
        let data = [0xFF, 0x00];
        let mut r = BitReader::new(&data);
        r.get_bits(3).unwrap();
        let pad = r.align_to_byte();
        assert_eq!(pad, 5);
        assert_eq!(r.bits_consumed(), 8);
    }

    #[test]
    fn ue_golomb_basic_values() {
        // "1" -> 0, "010" -> 1, "011" -> 2, "00100" -> 3
        let data = [0b1_010_011, 0b00100_000];
        let mut r = BitReader::new(&data);
        assert_eq!(r.get_ue_golomb().unwrap(), 0);
        assert_eq!(r.get_ue_golomb().unwrap(), 1);
        assert_eq!(r.get_ue_golomb().unwrap(), 2);
        assert_eq!(r.get_ue_golomb().unwrap(), 3);
    }

    #[test]
    fn se_golomb_maps_to_signed_sequence() {
        // ue codes 0,1,2,3,4 -> se values 0,1,-1,2,-2
        let data = [0b1_010_011, 0b00100_001, 0b00];
        let mut r = BitReader::new(&data);
        assert_eq!(r.get_se_golomb().unwrap(), 0);
        assert_eq!(r.get_se_golomb().unwrap(), 1);
        assert_eq!(r.get_se_golomb().unwrap(), -1);
        assert_eq!(r.get_se_golomb().unwrap(), 2);
    }

    #[test]
    fn underflow_is_need_more_data() {
        let data = [0b1000_0000];
        let mut r = BitReader::new(&data);
        r.get_bits(8).unwrap();
        assert_eq!(r.get_bits(1).unwrap_err(), CavsError::NeedMoreData);
    }

    #[test]
    fn ue_code_order_zero_rejects_overflowing_value() {
        // 31 leading zeros, a stop bit, then a 31-bit suffix of 1: ret =
        // (1<<31) - 1 + 1 == 0x80000000, the order-0 overflow threshold.
        let data = [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02];
        let mut r = BitReader::new(&data);
        assert!(r.get_ue_code(0).is_err());
    }

    #[test]
    fn get_bits_aec_skips_in_band_stuffing_code() {
        // 22 zero bits drive the look-back window's low 22 bits to zero,
        // landing at bit-offset 2 mod 8; the next two bits "10" are an
        // in-band stuffing code and must be skipped before the real read.
        let data = [0x00, 0x00, 0b0000_0010, 0b1010_0000];
        let mut r = BitReader::new(&data);
        assert_eq!(r.get_bits_aec(22).unwrap(), 0);
        assert_eq!(r.bits_consumed(), 22);

        let next = r.get_bits_aec(4).unwrap();
        assert_eq!(next, 0b1010);
        // 22 + 2 stuffing bits skipped + 4 bits read == 28.
        assert_eq!(r.bits_consumed(), 28);
    }

    #[test]
    fn get_bits_aec_does_not_skip_when_window_is_not_zero() {
        let data = [0b1010_1010u8];
        let mut r = BitReader::new(&data);
        r.get_bits(6).unwrap();
        assert_eq!(r.bits_consumed(), 6);

        // The window was never fed through the AEC path, so it's still
        // 0xFFFFFF: this "10" must be read as ordinary data, not skipped.
        let value = r.get_bits_aec(2).unwrap();
        assert_eq!(value, 0b10);
        assert_eq!(r.bits_consumed(), 8);
    }
}
