//! Schema module - Problem definitions for regex golf searches.

mod problem;

pub use problem::*;
