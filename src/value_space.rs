//! Resolution of the category indices an encoder expands into.

use crate::encoder::{CardinalityMode, EncoderState};
use crate::error::{ExportError, Result};

/// Computes the ordered category indices recorded by an encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueSpaceResolver;

impl ValueSpaceResolver {
    pub fn new() -> Self {
        Self
    }

    /// Ordered category indices for a single-feature encoder.
    ///
    /// In auto mode the observed indices are returned as recorded; their
    /// ordering is the producer's guarantee and is not re-checked here. In
    /// explicit mode the result is `0..cardinality`, which may be empty.
    ///
    /// # Errors
    /// [`ExportError::Configuration`] unless exactly one learned cardinality
    /// is present.
    pub fn resolve(&self, state: &EncoderState) -> Result<Vec<usize>> {
        let cardinality = match state.learned_cardinalities() {
            [single] => *single,
            other => {
                return Err(ExportError::config(format!(
                    "expected exactly one learned cardinality, got {}",
                    other.len()
                )))
            }
        };

        match state.mode() {
            CardinalityMode::Auto => Ok(state.observed_indices().to_vec()),
            CardinalityMode::Explicit => Ok((0..cardinality).collect()),
        }
    }
}
