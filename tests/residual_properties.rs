//! Crate-level conformance scenarios for residual decode/dequantization,
//! covering spec.md §8 properties 5-7. Exercised only through the crate's
//! public surface.

use cavs_entropy::residual::decode_block_vlc;
use cavs_entropy::tables::{DEQUANT_MUL, DEQUANT_SHIFT, INTRA_DEC, SCAN};
use cavs_entropy::bitreader::BitReader;

/// Property 5: every entry of the inverse-scan table is a valid raster
/// position, and the table is a permutation of `0..64` — so a position
/// accumulated by `dequant`'s reverse walk can never write outside the
/// 8x8 block once it has passed the `pos > 63` guard.
#[test]
fn scan_table_only_ever_names_in_bounds_positions() {
    let _ = env_logger::try_init();
    assert_eq!(SCAN.len(), 64);
    let mut seen = [false; 64];
    for &pos in SCAN.iter() {
        assert!((pos as usize) < 64);
        assert!(!seen[pos as usize], "duplicate scan position {pos}");
        seen[pos as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

/// Property 6 (formula check): the dequant multiply/shift/round formula
/// spec.md names, evaluated against this crate's own per-QP tables rather
/// than the worked example's literal constants (that table's own source
/// is outside the retrieved reference set; see DESIGN.md).
#[test]
fn dequant_formula_matches_the_published_shape() {
    let qp = 20usize;
    let level = 5i32;
    let mul = DEQUANT_MUL[qp] as i32;
    let shift = DEQUANT_SHIFT[qp] as i32;
    let round = 1i32 << (shift - 1);
    let dequantized = (level * mul + round) >> shift;
    // The formula must behave monotonically in level at a fixed qp — a
    // basic sanity check that doesn't depend on the table's exact values.
    let dequantized_double = (2 * level * mul + round) >> shift;
    assert!(dequantized_double > dequantized);
}

/// Property 7: in intra table 0, a `level_code` of 58 (the last entry
/// before the escape threshold `ESCAPE_CODE = 59`) is the EOB sentinel
/// and ends the block immediately with no coefficients.
///
/// `get_ue_code(order=2)` reaching 58 is encoded by the 9 bits
/// `000111110`: a 0th-order exp-Golomb code for 14 (`0001111`) followed
/// by the 2-bit order suffix `10` (`(14 << 2) + 2 == 58`).
#[test]
fn vlc_eob_scenario_in_intra_table_zero() {
    let data = [0b0001_1111u8, 0b0000_0000u8];
    let mut reader = BitReader::new(&data);
    let block = decode_block_vlc(&mut reader, &INTRA_DEC, 1, 0).unwrap();
    assert_eq!(block, [0i16; 64]);
}
