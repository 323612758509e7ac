//! # cavs-entropy
//!
//! Entropy-coded syntax layer for the Chinese AVS1 (JiZhun/Guangdian) video
//! standard: the Advanced Entropy Code (AEC) engine, its context model, the
//! fixed 2-D VLC fallback, residual coefficient decode/dequantization, and
//! the macroblock/slice syntax that drives them.
//!
//! This library is organized into:
//! - `bitreader`: MSB-first bit cursor shared by both entropy paths
//! - `aec`: the AEC arithmetic engine and its 323-context bank
//! - `tables`: 2-D VLC run/level tables, CBP remap, dequant/scan tables
//! - `vlc`: the fixed (non-adaptive) run/level decoder
//! - `symbols`: AEC-coded macroblock-level syntax elements
//! - `residual`: run/level decode (either path) through dequantization
//! - `macroblock`: per-macroblock I/P/B driver
//! - `slice`: slice boundary detection and header parsing
//! - `config`: decoder-wide parameters supplied by the caller

pub use error::{CavsError, Result};

pub mod aec;
pub mod bitreader;
pub mod config;
pub mod error;
pub mod macroblock;
pub mod residual;
pub mod slice;
pub mod symbols;
pub mod tables;
pub mod types;
pub mod vlc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underflow_propagates_through_the_public_result_alias() {
        let data = [0u8; 0];
        let mut reader = bitreader::BitReader::new(&data);
        let err: Result<u32> = reader.get_bits(1);
        assert_eq!(err, Err(CavsError::NeedMoreData));
    }
}
