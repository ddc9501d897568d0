//! Regex golf - fitness functions for black-box randomized search.
//!
//! Regex golf asks for the shortest regular expression that matches every
//! word of a positive list and none of a negative list. This crate turns that
//! problem into an objective over fixed-length real-valued genomes, ready to
//! be maximized by a genetic algorithm, hill climber or simulated annealer.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Serializable problem definitions
//! - `compute`: Genome decoding, component filtering and pattern scoring
//!
//! # Example
//!
//! ```rust
//! use regex_golf::{GolfEvaluator, GolfProblem};
//!
//! // positive: cat, car / negative: dog / components: ca, dog, t, r
//! let problem = GolfProblem::default();
//! let evaluator = GolfEvaluator::from_problem(&problem).unwrap();
//!
//! // Select "ca" and "t"; "dog" was disabled because it matches a negative word
//! let genome = [1.0, 1.0, 1.0, -1.0];
//! assert_eq!(evaluator.decode(&genome).unwrap(), "ca|t");
//!
//! // +20 for both positives, -4 for the pattern length
//! assert_eq!(evaluator.evaluate(&genome).unwrap(), 16.0);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{FitnessFunction, GolfEvaluator, INVALID_PATTERN_FITNESS, PatternScore};
pub use schema::{Encoding, GolfProblem};
