//! Compute module - Genome decoding and pattern scoring.

mod charmap;
mod components;
mod decoder;
mod evaluator;
mod scorer;

pub use charmap::*;
pub use components::*;
pub use decoder::*;
pub use evaluator::*;
pub use scorer::*;
