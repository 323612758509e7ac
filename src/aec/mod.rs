//! The Advanced Entropy Code engine (spec.md §4.1-§4.3): context state,
//! the context bank, and the three decode primitives.

pub mod context;
pub mod engine;

pub use context::{AecContext, ContextBank};
pub use engine::AecDecoder;
