//! Regex golf scoring.
//!
//! A pattern earns 10 points for every positive word it matches, loses 10 for
//! every negative word it matches, and pays one point per character of its own
//! length. Matching is an unanchored search, so `"a"` matches `"cat"`.

use regex::Regex;

/// Points gained (or lost) per matched word.
pub const MATCH_REWARD: f64 = 10.0;

/// Fitness of a pattern that does not compile.
///
/// Lower than any score a valid pattern can reach, since a valid score is
/// bounded below by `-(MATCH_REWARD * negatives + pattern length)`.
pub const INVALID_PATTERN_FITNESS: f64 = f64::MIN;

/// Breakdown of a single pattern evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternScore {
    /// The decoded pattern.
    pub pattern: String,
    /// Combined fitness (higher is better).
    pub fitness: f64,
    /// Positive words matched.
    pub positive_matches: usize,
    /// Negative words matched.
    pub negative_matches: usize,
    /// Whether the pattern compiled.
    pub valid: bool,
}

impl PatternScore {
    /// Check whether the pattern separates the word lists perfectly.
    pub fn is_solution(&self, positive_total: usize) -> bool {
        self.valid && self.negative_matches == 0 && self.positive_matches == positive_total
    }
}

/// Score a pattern against both word lists.
pub fn score_pattern<P, N>(pattern: &str, positive: &[P], negative: &[N]) -> f64
where
    P: AsRef<str>,
    N: AsRef<str>,
{
    score_pattern_detailed(pattern.to_string(), positive, negative).fitness
}

/// Score a pattern and keep the per-list match counts.
pub fn score_pattern_detailed<P, N>(pattern: String, positive: &[P], negative: &[N]) -> PatternScore
where
    P: AsRef<str>,
    N: AsRef<str>,
{
    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(e) => {
            log::trace!("Rejecting pattern {pattern:?}: {e}");
            return PatternScore {
                pattern,
                fitness: INVALID_PATTERN_FITNESS,
                positive_matches: 0,
                negative_matches: 0,
                valid: false,
            };
        }
    };

    let positive_matches = count_matches(&regex, positive);
    let negative_matches = count_matches(&regex, negative);

    let score = MATCH_REWARD * positive_matches as f64 - MATCH_REWARD * negative_matches as f64;
    let length = pattern.chars().count() as f64;

    PatternScore {
        fitness: score - length,
        pattern,
        positive_matches,
        negative_matches,
        valid: true,
    }
}

fn count_matches<S: AsRef<str>>(regex: &Regex, words: &[S]) -> usize {
    words.iter().filter(|w| regex.is_match(w.as_ref())).count()
}
