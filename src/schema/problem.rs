//! Problem definitions for regex golf searches.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compute::{GENE_SCALE, MUTATION_GENES};

/// A regex golf problem: the word lists and the genome encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GolfProblem {
    /// Words the pattern must match.
    pub positive: Vec<String>,
    /// Words the pattern must not match.
    #[serde(default)]
    pub negative: Vec<String>,
    /// How genomes are decoded into patterns.
    pub encoding: Encoding,
}

impl Default for GolfProblem {
    fn default() -> Self {
        Self {
            positive: vec!["cat".into(), "car".into()],
            negative: vec!["dog".into()],
            encoding: Encoding::ComponentSelection {
                components: vec!["ca".into(), "dog".into(), "t".into(), "r".into()],
            },
        }
    }
}

/// Genome encoding selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Encoding {
    /// One gene per component; positive genes select it into an alternation.
    ComponentSelection { components: Vec<String> },
    /// Five genes in `[0, 256)` choose and mutate a substring of a positive word.
    SubstringMutation,
}

impl GolfProblem {
    /// Parse a problem from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ProblemError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a problem from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Genome length an external search must produce.
    pub fn genome_len(&self) -> usize {
        match &self.encoding {
            Encoding::ComponentSelection { components } => components.len(),
            Encoding::SubstringMutation => MUTATION_GENES,
        }
    }

    /// Range each gene is read from.
    ///
    /// Component genes only matter by sign, so any symmetric range works.
    pub fn gene_bounds(&self) -> (f64, f64) {
        match &self.encoding {
            Encoding::ComponentSelection { .. } => (-1.0, 1.0),
            Encoding::SubstringMutation => (0.0, GENE_SCALE),
        }
    }

    /// Validate the problem definition.
    pub fn validate(&self) -> Result<(), ProblemError> {
        match &self.encoding {
            Encoding::ComponentSelection { components } if components.is_empty() => {
                Err(ProblemError::NoComponents)
            }
            Encoding::SubstringMutation if self.positive.is_empty() => {
                Err(ProblemError::NoPositiveWords)
            }
            _ => Ok(()),
        }
    }
}

/// Problem loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("Component selection needs at least one component")]
    NoComponents,
    #[error("Substring mutation needs at least one positive word")]
    NoPositiveWords,
    #[error("Failed to read problem: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse problem: {0}")]
    Parse(#[from] serde_json::Error),
}
