//! Learned parameters of a fitted one-hot encoder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the encoder recorded the categories it saw during fitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalityMode {
    /// Sparse: the observed category indices were recorded explicitly.
    Auto,
    /// Dense: every index below the learned cardinality is a category.
    Explicit,
}

impl fmt::Display for CardinalityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardinalityMode::Auto => f.write_str("auto"),
            CardinalityMode::Explicit => f.write_str("explicit"),
        }
    }
}

/// Immutable parameter snapshot of one fitted encoder.
///
/// `observed_indices` is only meaningful in [`CardinalityMode::Auto`], where
/// the producer guarantees it is ascending and free of duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderState {
    mode: CardinalityMode,
    learned_cardinalities: Vec<usize>,
    observed_indices: Vec<usize>,
}

impl EncoderState {
    pub fn new(
        mode: CardinalityMode,
        learned_cardinalities: Vec<usize>,
        observed_indices: Vec<usize>,
    ) -> Self {
        Self {
            mode,
            learned_cardinalities,
            observed_indices,
        }
    }

    /// State of an encoder fitted with `n_values="auto"`.
    pub fn auto(learned_cardinalities: Vec<usize>, observed_indices: Vec<usize>) -> Self {
        Self::new(CardinalityMode::Auto, learned_cardinalities, observed_indices)
    }

    /// State of an encoder fitted with an explicit value count.
    pub fn explicit(learned_cardinalities: Vec<usize>) -> Self {
        Self::new(CardinalityMode::Explicit, learned_cardinalities, Vec::new())
    }

    pub fn mode(&self) -> CardinalityMode {
        self.mode
    }

    /// One entry per input feature the encoder was fit on.
    pub fn learned_cardinalities(&self) -> &[usize] {
        &self.learned_cardinalities
    }

    pub fn observed_indices(&self) -> &[usize] {
        &self.observed_indices
    }
}
