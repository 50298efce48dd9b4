//! Loading encoder state from a stored parameter snapshot.
//!
//! A snapshot is the JSON object of attributes a fitted encoder carried when
//! it was pickled, e.g.
//!
//! ```text
//! { "n_values": "auto", "n_values_": [6], "active_features_": [0, 2, 5] }
//! ```

use crate::encoder::{CardinalityMode, EncoderState};
use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute map of one fitted encoder.
pub type ParameterSnapshot = Map<String, Value>;

/// Names of the snapshot attributes the loader reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotKeys {
    /// Cardinality mode: the string `"auto"` or an explicit count.
    pub mode: String,
    /// Learned per-feature cardinalities.
    pub learned_cardinalities: String,
    /// Observed category indices, present in `auto` mode.
    pub observed_indices: String,
}

impl Default for SnapshotKeys {
    fn default() -> Self {
        Self {
            mode: "n_values".to_string(),
            learned_cardinalities: "n_values_".to_string(),
            observed_indices: "active_features_".to_string(),
        }
    }
}

impl SnapshotKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key holding the cardinality mode.
    pub fn with_mode(mut self, key: impl Into<String>) -> Self {
        self.mode = key.into();
        self
    }

    /// Set the key holding the learned cardinalities.
    pub fn with_learned_cardinalities(mut self, key: impl Into<String>) -> Self {
        self.learned_cardinalities = key.into();
        self
    }

    /// Set the key holding the observed indices.
    pub fn with_observed_indices(mut self, key: impl Into<String>) -> Self {
        self.observed_indices = key.into();
        self
    }
}

impl EncoderState {
    /// Build encoder state from a snapshot using the default attribute names.
    pub fn from_snapshot(snapshot: &ParameterSnapshot) -> Result<Self> {
        Self::from_snapshot_with_keys(snapshot, &SnapshotKeys::default())
    }

    /// Build encoder state from a snapshot using custom attribute names.
    pub fn from_snapshot_with_keys(
        snapshot: &ParameterSnapshot,
        keys: &SnapshotKeys,
    ) -> Result<Self> {
        let mode = parse_mode(required(snapshot, &keys.mode)?, &keys.mode)?;

        let learned_cardinalities = parse_indices(
            required(snapshot, &keys.learned_cardinalities)?,
            &keys.learned_cardinalities,
        )?;

        let observed_indices = match (mode, snapshot.get(&keys.observed_indices)) {
            (CardinalityMode::Auto, None) => {
                return Err(ExportError::config(format!(
                    "missing parameter '{}' required in auto mode",
                    keys.observed_indices
                )))
            }
            (_, Some(value)) if !value.is_null() => {
                parse_indices(value, &keys.observed_indices)?
            }
            (CardinalityMode::Auto, Some(_)) => {
                return Err(ExportError::config(format!(
                    "parameter '{}' is null in auto mode",
                    keys.observed_indices
                )))
            }
            (CardinalityMode::Explicit, _) => Vec::new(),
        };

        tracing::trace!(
            mode = %mode,
            learned = ?learned_cardinalities,
            observed = observed_indices.len(),
            "loaded encoder state"
        );

        Ok(EncoderState::new(mode, learned_cardinalities, observed_indices))
    }
}

fn required<'a>(snapshot: &'a ParameterSnapshot, key: &str) -> Result<&'a Value> {
    snapshot
        .get(key)
        .ok_or_else(|| ExportError::config(format!("missing parameter '{}'", key)))
}

fn parse_mode(value: &Value, key: &str) -> Result<CardinalityMode> {
    match value {
        Value::String(s) if s == "auto" => Ok(CardinalityMode::Auto),
        Value::String(s) => Err(ExportError::config(format!(
            "parameter '{}' has unknown mode '{}'",
            key, s
        ))),
        Value::Number(_) => {
            as_index(value, key)?;
            Ok(CardinalityMode::Explicit)
        }
        Value::Array(_) => {
            parse_indices(value, key)?;
            Ok(CardinalityMode::Explicit)
        }
        other => Err(ExportError::config(format!(
            "parameter '{}' must be \"auto\" or a count, got {}",
            key, other
        ))),
    }
}

fn parse_indices(value: &Value, key: &str) -> Result<Vec<usize>> {
    let items = value.as_array().ok_or_else(|| {
        ExportError::config(format!("parameter '{}' must be an array, got {}", key, value))
    })?;
    items.iter().map(|item| as_index(item, key)).collect()
}

/// Largest count or index a snapshot may carry.
pub const MAX_INDEX: usize = i32::MAX as usize;

/// Non-negative integral number up to [`MAX_INDEX`]; `3.0` is accepted as `3`.
fn as_index(value: &Value, key: &str) -> Result<usize> {
    let invalid = || {
        ExportError::config(format!(
            "parameter '{}' must hold integers in 0..={}, got {}",
            key, MAX_INDEX, value
        ))
    };

    if let Some(u) = value.as_u64() {
        return usize::try_from(u)
            .ok()
            .filter(|&v| v <= MAX_INDEX)
            .ok_or_else(invalid);
    }

    match value.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= MAX_INDEX as f64 => {
            Ok(f as usize)
        }
        _ => Err(invalid()),
    }
}
