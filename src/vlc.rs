//! The fixed (non-adaptive) 2-D run/level VLC engine (spec.md §4.4).
//!
//! Each call walks a family of [`Dec2dVlc`](crate::tables::Dec2dVlc) tables,
//! switching tables as `table_inc` dictates, decoding one run/level pair at
//! a time until end-of-block or an escape code is hit.

use crate::bitreader::BitReader;
use crate::error::{CavsError, Result};
use crate::tables::{Dec2dVlc, RunLevelEntry, ESCAPE_CODE};
use crate::types::RunLevel;

/// Maximum number of coefficients in an 8x8 block, plus the implicit
/// end-of-block slot (spec.md §4.4.1).
const MAX_COEFFS: usize = 65;

/// Decodes one 8x8 block's run/level sequence using the fixed VLC tables,
/// mirroring the `!h->aec_enable` branch of `decode_residual_block`. The
/// reference decoder walks this family with a raw `struct dec_2dvlc *`
/// that steps across tables; here that's just an index into `family`.
pub fn decode_block(
    reader: &mut BitReader,
    family: &[Dec2dVlc],
    esc_golomb_order: u32,
) -> Result<Vec<RunLevel>> {
    let mut out = Vec::with_capacity(16);
    let mut idx = 0usize;

    for _ in 0..MAX_COEFFS {
        let table = table_at(family, idx)?;
        let level_code = reader.get_ue_code(table.golomb_order)?;

        if level_code >= ESCAPE_CODE {
            let run = ((level_code - ESCAPE_CODE) >> 1) + 1;
            if run > 64 {
                return Err(CavsError::invalid(format!("run {run} is too large")));
            }
            let esc_code = reader.get_ue_code(esc_golomb_order)? as i32;
            if !(0..=32767).contains(&esc_code) {
                return Err(CavsError::invalid("esc_code invalid"));
            }
            let base = if run as i32 > table.max_run {
                1
            } else {
                table.level_add[run as usize]
            };
            let mut level = esc_code + base;

            while level > table_at(family, idx)?.inc_limit {
                idx += 1;
            }

            let negative = level_code & 1 != 0;
            if negative {
                level = -level;
            }
            out.push(RunLevel {
                level: level as i16,
                run: run as u8,
            });
        } else {
            let entry: RunLevelEntry = table.rltab[level_code as usize];
            let (level, run, table_inc) = entry;
            if level == 0 {
                break;
            }
            out.push(RunLevel {
                level: level as i16,
                run: run as u8,
            });
            idx += table_inc as usize;
        }
    }

    Ok(out)
}

fn table_at(family: &[Dec2dVlc], idx: usize) -> Result<&Dec2dVlc> {
    family
        .get(idx)
        .ok_or_else(|| CavsError::invalid("2D-VLC table index out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::INTRA_DEC;

    #[test]
    fn decodes_one_coefficient_then_end_of_block() {
        // First code selects intra_dec[0]'s first entry ((1,1,1)), which
        // steps the family into intra_dec[1] via table_inc; the second
        // code there is intra_dec[1]'s EOB entry.
        let data = [0b1000_1010u8];
        let mut reader = BitReader::new(&data);
        let result = decode_block(&mut reader, &INTRA_DEC, 1).unwrap();
        assert_eq!(result, vec![RunLevel { level: 1, run: 1 }]);
    }

    #[test]
    fn end_of_block_on_sixth_table_stops_immediately() {
        // intra_dec[6]'s rltab starts with EOB (level 0): a ue_golomb code
        // of 0 there (a leading "1" bit) ends the block with no output.
        let data = [0b1000_0000u8];
        let mut reader = BitReader::new(&data);
        let result = decode_block(&mut reader, &INTRA_DEC[6..], 1).unwrap();
        assert!(result.is_empty());
    }
}
