//! Regex golf evaluation function for black-box search drivers.

use rayon::prelude::*;

use crate::schema::{Encoding, GolfProblem, ProblemError};

use super::components::{ComponentError, ComponentSet};
use super::decoder::{DecodeError, PatternDecoder};
use super::scorer::{PatternScore, score_pattern_detailed};

/// Anything a search driver can maximize over real-valued genomes.
pub trait FitnessFunction: Send + Sync {
    /// Fitness of a genome (higher is better).
    fn value(&self, vector: &[f64]) -> Result<f64, DecodeError>;
}

/// Decodes genomes into patterns and scores them against fixed word lists.
///
/// Word lists and the component set are fixed at construction, so a single
/// evaluator can be shared across threads.
#[derive(Debug, Clone)]
pub struct GolfEvaluator {
    positive: Vec<String>,
    negative: Vec<String>,
    decoder: PatternDecoder,
}

impl GolfEvaluator {
    /// Evaluator over an alternation of building blocks.
    ///
    /// Components matching any negative word are disabled here and never
    /// selected afterwards.
    pub fn component_selection(
        positive: Vec<String>,
        negative: Vec<String>,
        components: &[String],
    ) -> Result<Self, EvaluatorError> {
        let set = ComponentSet::filtered(components, &negative)?;
        log::info!(
            "Component selection evaluator: {} positive, {} negative, {}/{} components active",
            positive.len(),
            negative.len(),
            set.active_count(),
            set.len()
        );

        Ok(Self {
            positive,
            negative,
            decoder: PatternDecoder::ComponentSelection(set),
        })
    }

    /// Evaluator over single-character mutations of positive substrings.
    pub fn substring_mutation(positive: Vec<String>, negative: Vec<String>) -> Self {
        log::info!(
            "Substring mutation evaluator: {} positive, {} negative",
            positive.len(),
            negative.len()
        );

        Self {
            positive,
            negative,
            decoder: PatternDecoder::SubstringMutation,
        }
    }

    /// Build the evaluator described by a problem definition.
    pub fn from_problem(problem: &GolfProblem) -> Result<Self, EvaluatorError> {
        problem.validate()?;

        let positive = problem.positive.clone();
        let negative = problem.negative.clone();
        match &problem.encoding {
            Encoding::ComponentSelection { components } => {
                Self::component_selection(positive, negative, components)
            }
            Encoding::SubstringMutation => Ok(Self::substring_mutation(positive, negative)),
        }
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    pub fn decoder(&self) -> &PatternDecoder {
        &self.decoder
    }

    /// Genome length accepted by [`Self::evaluate`].
    pub fn genome_len(&self) -> usize {
        self.decoder.genome_len()
    }

    /// Decode a genome into its candidate pattern.
    pub fn decode(&self, vector: &[f64]) -> Result<String, DecodeError> {
        self.decoder.decode(vector, &self.positive)
    }

    /// Fitness of a genome.
    ///
    /// A pattern that fails to compile scores
    /// [`INVALID_PATTERN_FITNESS`](super::INVALID_PATTERN_FITNESS); errors are
    /// reserved for genomes that violate the decoder's contract.
    pub fn evaluate(&self, vector: &[f64]) -> Result<f64, DecodeError> {
        self.evaluate_detailed(vector).map(|score| score.fitness)
    }

    /// Fitness of a genome along with the decoded pattern and match counts.
    pub fn evaluate_detailed(&self, vector: &[f64]) -> Result<PatternScore, DecodeError> {
        let pattern = self.decode(vector)?;
        Ok(score_pattern_detailed(pattern, &self.positive, &self.negative))
    }

    /// Evaluate a population in parallel, preserving order.
    pub fn evaluate_batch<V>(&self, vectors: &[V]) -> Vec<Result<f64, DecodeError>>
    where
        V: AsRef<[f64]> + Sync,
    {
        vectors
            .par_iter()
            .map(|vector| self.evaluate(vector.as_ref()))
            .collect()
    }
}

impl FitnessFunction for GolfEvaluator {
    fn value(&self, vector: &[f64]) -> Result<f64, DecodeError> {
        self.evaluate(vector)
    }
}

/// Errors raised while constructing an evaluator.
#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    #[error(transparent)]
    Component(#[from] ComponentError),
    #[error("Invalid problem: {0}")]
    Problem(#[from] ProblemError),
}
