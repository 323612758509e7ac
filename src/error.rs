//! Crate-wide error type.
//!
//! Mirrors the error taxonomy of spec.md §7: a decode error always falls
//! into one of three buckets, each of which the macroblock/slice driver
//! reacts to differently (abort the macroblock/slice, surface a
//! missing-feature notification, or ask the caller for more bytes).

use thiserror::Error;

/// Errors raised while decoding the entropy-coded syntax layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CavsError {
    /// The bitstream violates a structural invariant (out-of-range position,
    /// escape code, run length, macroblock type, CBP, or prediction mode).
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The bitstream requests a feature this decoder does not implement.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// The reader ran out of bits before a syntax element finished decoding.
    #[error("need more data")]
    NeedMoreData,
}

impl CavsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CavsError::InvalidData(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        CavsError::UnsupportedFeature(msg.into())
    }
}

/// A specialized `Result` type for entropy-decoding operations.
pub type Result<T> = std::result::Result<T, CavsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CavsError::InvalidData("run too large".into()).to_string(),
            "invalid data: run too large"
        );
        assert_eq!(
            CavsError::UnsupportedFeature("weighted prediction".into()).to_string(),
            "unsupported feature: weighted prediction"
        );
        assert_eq!(CavsError::NeedMoreData.to_string(), "need more data");
    }
}
