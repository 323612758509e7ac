//! The AEC arithmetic engine: interval state plus the three decode
//! primitives (spec.md §4.1-§4.3).
//!
//! This is a line-for-line Rust rendering of the reference decoder's
//! `aec_decode_bin`/`aec_decode_bypass`/`aec_decode_stuffing_bit`: the three
//! functions share a family resemblance (recompute `rS2`/`rT2` from the LPS
//! probability, compare against `(valueS, valueT)`, renormalize) but differ
//! in which bits of that resemblance is exact, so each is transcribed
//! on its own rather than forced through one shared helper.
//!
//! Every raw bit this engine consumes — the initial 9 bits, every
//! renormalization bit — goes through [`BitReader::get_bits_aec`]/
//! [`BitReader::get_bit_aec`] rather than the plain `get_bits`/`get_bit`,
//! since those are the only reads that feed the in-band stuffing look-back
//! window (mirrors `dbg_get_bits` wrapping every AEC-path bit read).

use crate::aec::context::AecContext;
use crate::bitreader::BitReader;
use crate::error::Result;

/// Owns the AEC interval state and decodes bins by borrowing a shared
/// [`BitReader`] for its raw bit needs.
pub struct AecDecoder<'a, 'b> {
    reader: &'b mut BitReader<'a>,
    r_s1: i32,
    r_t1: i32,
    bound_s: i32,
    value_s: i32,
    value_t: i32,
    b_flag: bool,
}

impl<'a, 'b> AecDecoder<'a, 'b> {
    /// Initializes interval state from the head of a slice's AEC-coded data
    /// (mirrors `aec_init_aecdec`).
    pub fn new(reader: &'b mut BitReader<'a>) -> Result<Self> {
        let mut dec = AecDecoder {
            reader,
            r_s1: 0,
            r_t1: 0xFF,
            bound_s: 0xFE,
            value_s: 0,
            value_t: 0,
            b_flag: false,
        };
        dec.value_t = dec.reader.get_bits_aec(9)? as i32;
        while (dec.value_t >> 8) & 1 == 0 && dec.value_s < dec.bound_s {
            dec.value_t = (dec.value_t << 1) | dec.reader.get_bit_aec()? as i32;
            dec.value_s += 1;
        }
        dec.b_flag = dec.value_t < 0x100;
        dec.value_t &= 0xFF;
        Ok(dec)
    }

    fn bit(&mut self) -> Result<i32> {
        Ok(self.reader.get_bit_aec()? as i32)
    }

    /// Decodes one bin against a single context, updating it in place
    /// (mirrors `aec_decode_bin_debug` with `contextWeighting == 0`).
    pub fn decode_bin(&mut self, ctx: &mut AecContext) -> Result<bool> {
        let pred_mps = ctx.mps;
        let lg_pmps = ctx.lg_pmps as i32;
        let bin_val = self.decode_context_bin(pred_mps, lg_pmps)?;
        ctx.update(bin_val);
        Ok(bin_val)
    }

    /// Decodes one bin against the weighted average of two contexts,
    /// updating both (mirrors `contextWeighting == 1`).
    pub fn decode_bin_weighted(&mut self, ctx: &mut AecContext, ctx2: &mut AecContext) -> Result<bool> {
        let (pred_mps, lg_pmps) = if ctx.mps == ctx2.mps {
            (ctx.mps, (ctx.lg_pmps as i32 + ctx2.lg_pmps as i32) / 2)
        } else if ctx.lg_pmps < ctx2.lg_pmps {
            (ctx.mps, 1023 - ((ctx2.lg_pmps - ctx.lg_pmps) as i32 >> 1))
        } else {
            (ctx2.mps, 1023 - ((ctx.lg_pmps - ctx2.lg_pmps) as i32 >> 1))
        };
        let bin_val = self.decode_context_bin(pred_mps, lg_pmps)?;
        ctx.update(bin_val);
        ctx2.update(bin_val);
        Ok(bin_val)
    }

    fn decode_context_bin(&mut self, pred_mps: bool, lg_pmps: i32) -> Result<bool> {
        let (r_s2, r_t2, s_flag) = self.split_interval(lg_pmps);

        let bin_val;
        if r_s2 > self.value_s || ((r_s2 == self.value_s && self.value_t >= r_t2) && !self.b_flag) {
            bin_val = !pred_mps;
            let mut t_rlps = if s_flag == 0 {
                lg_pmps >> 2
            } else {
                self.r_t1 + (lg_pmps >> 2)
            };
            if r_s2 == self.value_s {
                self.value_t -= r_t2;
            } else {
                self.value_t = 256 + ((self.value_t << 1) | self.bit()?) - r_t2;
            }
            while t_rlps < 0x100 {
                t_rlps <<= 1;
                self.value_t = (self.value_t << 1) | self.bit()?;
            }
            self.r_t1 = t_rlps & 0xFF;
        } else {
            bin_val = pred_mps;
            self.r_s1 = r_s2;
            self.r_t1 = r_t2;
        }

        if bin_val != pred_mps || (bin_val == pred_mps && self.b_flag && r_s2 == self.bound_s) {
            self.r_s1 = 0;
            self.value_s = 0;
            while self.value_t < 0x100 {
                self.value_s += 1;
                self.value_t = (self.value_t << 1) | self.bit()?;
            }
            self.b_flag = self.value_t < 0x100;
            self.value_t &= 0xFF;
        }

        Ok(bin_val)
    }

    /// Decodes one bin with the fixed 50/50 "bypass" model, used for syntax
    /// elements that are not context-adaptive (mirrors `aec_decode_bypass`).
    pub fn decode_bypass(&mut self) -> Result<bool> {
        const LG_PMPS: i32 = 1023;
        let (r_s2, r_t2, s_flag) = self.split_interval(LG_PMPS);

        if r_s2 > self.value_s || (r_s2 == self.value_s && self.value_t >= r_t2) {
            let bin_val = true;
            let mut t_rlps = if s_flag == 0 {
                LG_PMPS >> 2
            } else {
                self.r_t1 + (LG_PMPS >> 2)
            };
            if r_s2 == self.value_s {
                self.value_t -= r_t2;
            } else {
                self.value_t = ((self.value_t << 1) | self.bit()?) - r_t2 + 256;
            }
            while t_rlps < 0x100 {
                t_rlps <<= 1;
                self.value_t = (self.value_t << 1) | self.bit()?;
            }
            self.r_s1 = 0;
            self.r_t1 = t_rlps & 0xFF;
            self.value_s = 0;
            while self.value_t < 0x100 {
                self.value_s += 1;
                self.value_t = (self.value_t << 1) | self.bit()?;
            }
            self.value_t &= 0xFF;
            Ok(bin_val)
        } else {
            self.r_s1 = r_s2;
            self.r_t1 = r_t2;
            Ok(false)
        }
    }

    /// Decodes the stuffing bit inserted between slice data and the next
    /// start code (mirrors `aec_decode_stuffing_bit`; identical shape to
    /// [`Self::decode_bypass`] but with `lgPmps` fixed at 4).
    pub fn decode_stuffing_bit(&mut self) -> Result<bool> {
        const LG_PMPS: i32 = 4;
        let (r_s2, r_t2, s_flag) = self.split_interval(LG_PMPS);

        if r_s2 > self.value_s || (r_s2 == self.value_s && self.value_t >= r_t2) {
            let bin_val = true;
            let mut t_rlps = if s_flag == 0 {
                LG_PMPS >> 2
            } else {
                self.r_t1 + (LG_PMPS >> 2)
            };
            if r_s2 == self.value_s {
                self.value_t -= r_t2;
            } else {
                self.value_t = 256 + ((self.value_t << 1) | self.bit()?) - r_t2;
            }
            while t_rlps < 0x100 {
                t_rlps <<= 1;
                self.value_t = (self.value_t << 1) | self.bit()?;
            }
            self.r_s1 = 0;
            self.r_t1 = t_rlps & 0xFF;
            self.value_s = 0;
            while self.value_t < 0x100 {
                self.value_s += 1;
                self.value_t = (self.value_t << 1) | self.bit()?;
            }
            self.value_t &= 0xFF;
            Ok(bin_val)
        } else {
            self.r_s1 = r_s2;
            self.r_t1 = r_t2;
            Ok(false)
        }
    }

    /// Computes `(rS2, rT2, sFlag)` from the current `(rS1, rT1)` and the
    /// predicted LPS probability; shared by all three decode primitives.
    fn split_interval(&self, lg_pmps: i32) -> (i32, i32, i32) {
        if self.r_t1 >= (lg_pmps >> 2) {
            (self.r_s1, self.r_t1 - (lg_pmps >> 2), 0)
        } else {
            (self.r_s1 + 1, 256 + self.r_t1 - (lg_pmps >> 2), 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_consumes_at_least_nine_bits() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF];
        let mut reader = BitReader::new(&data);
        let dec = AecDecoder::new(&mut reader).unwrap();
        assert!(reader.bits_consumed() >= 9);
        assert_eq!(dec.r_t1, 0xFF);
    }

    #[test]
    fn decode_bin_updates_context_and_advances_stream() {
        let data = [0b0101_0101, 0b1100_1100, 0b1111_0000, 0x00];
        let mut reader = BitReader::new(&data);
        let mut dec = AecDecoder::new(&mut reader).unwrap();
        let mut ctx = AecContext::default();
        let before = reader.bits_consumed();
        let _ = dec.decode_bin(&mut ctx).unwrap();
        assert!(reader.bits_consumed() >= before);
        assert_eq!(ctx.cycno, 1);
    }

    #[test]
    fn decode_bypass_runs_without_context() {
        let data = [0xAA, 0x55, 0xFF, 0x00, 0x12];
        let mut reader = BitReader::new(&data);
        let mut dec = AecDecoder::new(&mut reader).unwrap();
        for _ in 0..4 {
            dec.decode_bypass().unwrap();
        }
    }

    #[test]
    fn decode_stuffing_bit_runs_without_context() {
        let data = [0x77, 0x88, 0x99, 0xAA, 0xBB];
        let mut reader = BitReader::new(&data);
        let mut dec = AecDecoder::new(&mut reader).unwrap();
        dec.decode_stuffing_bit().unwrap();
    }
}
