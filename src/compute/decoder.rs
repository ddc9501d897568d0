//! Decoders from real-valued genomes to candidate patterns.
//!
//! Two encodings are supported:
//!
//! - **Component selection**: one gene per building block; every strictly
//!   positive gene whose component survived filtering is joined into an
//!   alternation, in gene order.
//! - **Substring mutation**: five genes pick a positive word, a substring of
//!   it, a position inside that substring and a replacement character.

use super::charmap::{NO_CHAR, map_to_char};
use super::components::ComponentSet;

/// Number of genes read by the substring-mutation encoding.
pub const MUTATION_GENES: usize = 5;

/// Scale of each substring-mutation gene; genes are expected in `[0, GENE_SCALE)`.
pub const GENE_SCALE: f64 = 256.0;

/// Maps a genome to a pattern string.
#[derive(Debug, Clone)]
pub enum PatternDecoder {
    /// Alternation of the selected components.
    ComponentSelection(ComponentSet),
    /// Mutated substring of a single positive word.
    SubstringMutation,
}

impl PatternDecoder {
    /// Genome length this decoder expects.
    pub fn genome_len(&self) -> usize {
        match self {
            Self::ComponentSelection(components) => components.len(),
            Self::SubstringMutation => MUTATION_GENES,
        }
    }

    /// Decode a genome into a pattern.
    ///
    /// `positive` is only read by the substring-mutation encoding.
    pub fn decode<S: AsRef<str>>(
        &self,
        vector: &[f64],
        positive: &[S],
    ) -> Result<String, DecodeError> {
        if vector.len() != self.genome_len() {
            return Err(DecodeError::VectorLength {
                expected: self.genome_len(),
                actual: vector.len(),
            });
        }
        if let Some((index, &value)) = vector.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DecodeError::NonFiniteGene { index, value });
        }

        match self {
            Self::ComponentSelection(components) => Ok(select_components(components, vector)),
            Self::SubstringMutation => mutate_substring(vector, positive),
        }
    }
}

fn select_components(components: &ComponentSet, vector: &[f64]) -> String {
    let selected: Vec<&str> = vector
        .iter()
        .enumerate()
        .filter(|&(_, &gene)| gene > 0.0)
        .filter_map(|(i, _)| components.get(i))
        .collect();

    selected.join("|")
}

/// Null replacement policy: a [`NO_CHAR`] replacement is skipped and the
/// extracted substring is returned unchanged.
fn mutate_substring<S: AsRef<str>>(vector: &[f64], positive: &[S]) -> Result<String, DecodeError> {
    let word_index = scaled_index(positive.len(), vector[0], 0, positive.len())?;
    let word: Vec<char> = positive[word_index].as_ref().chars().collect();
    if word.is_empty() {
        return Err(DecodeError::EmptyWord { index: word_index });
    }

    let last = word.len() - 1;
    let start = scaled_index(last, vector[1], 1, word.len())?;
    let end = scaled_index(last - start, vector[2], 2, last - start + 1)? + 1 + start;
    let mut substring = word[start..end].to_vec();

    let replace_index = scaled_index(substring.len(), vector[3], 3, substring.len())?;
    let replacement = map_to_char(vector[4]);
    if replacement != NO_CHAR {
        substring[replace_index] = replacement;
    }

    Ok(substring.into_iter().collect())
}

/// `trunc(span * gene / GENE_SCALE)`, required to land inside `0..bound`.
fn scaled_index(
    span: usize,
    gene: f64,
    gene_index: usize,
    bound: usize,
) -> Result<usize, DecodeError> {
    let raw = (span as f64 * gene / GENE_SCALE).trunc();
    if raw >= 0.0 && raw < bound as f64 {
        Ok(raw as usize)
    } else {
        Err(DecodeError::IndexOutOfRange {
            gene: gene_index,
            index: raw as i64,
            len: bound,
        })
    }
}

/// Caller contract violations detected while decoding.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Genome has {actual} genes, expected {expected}")]
    VectorLength { expected: usize, actual: usize },
    #[error("Gene {index} is not finite ({value})")]
    NonFiniteGene { index: usize, value: f64 },
    #[error("Gene {gene} selects index {index}, outside 0..{len}")]
    IndexOutOfRange { gene: usize, index: i64, len: usize },
    #[error("Positive word {index} is empty")]
    EmptyWord { index: usize },
}
