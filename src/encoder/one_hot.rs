//! One-hot encoder export.
//!
//! Converts the learned parameters of a fitted one-hot encoder into one binary
//! indicator feature per category.

use super::state::EncoderState;
use super::traits::FeatureEncoder;
use crate::error::Result;
use crate::expander::FeatureExpander;
use crate::feature::{BinaryIndicatorFeature, InputFeature};
use crate::registry::FeatureMapper;
use crate::snapshot::{ParameterSnapshot, SnapshotKeys};
use crate::types::{infer_data_type, DataType, NumericValue, OpType};
use crate::value_space::ValueSpaceResolver;

/// A fitted one-hot encoder over a single input feature.
///
/// # Example
/// ```ignore
/// use onehot_export::encoder::{EncoderState, FeatureEncoder, OneHotEncoder};
/// use onehot_export::feature::{InputFeature, RawNumericFeature};
/// use onehot_export::registry::ValueSpaceRegistry;
///
/// let encoder = OneHotEncoder::new(EncoderState::explicit(vec![3]));
/// let mut registry = ValueSpaceRegistry::new();
///
/// let input = [InputFeature::from(RawNumericFeature::new("origin"))];
/// let features = encoder.encode_features(&["origin".into()], &input, &mut registry)?;
/// // origin==0, origin==1, origin==2
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneHotEncoder {
    state: EncoderState,
}

impl OneHotEncoder {
    pub fn new(state: EncoderState) -> Self {
        Self { state }
    }

    /// Load an encoder from a parameter snapshot with the default keys.
    pub fn from_snapshot(snapshot: &ParameterSnapshot) -> Result<Self> {
        EncoderState::from_snapshot(snapshot).map(Self::new)
    }

    /// Load an encoder from a parameter snapshot with custom keys.
    pub fn from_snapshot_with_keys(
        snapshot: &ParameterSnapshot,
        keys: &SnapshotKeys,
    ) -> Result<Self> {
        EncoderState::from_snapshot_with_keys(snapshot, keys).map(Self::new)
    }

    pub fn state(&self) -> &EncoderState {
        &self.state
    }

    /// Ordered category indices this encoder expands into.
    pub fn values(&self) -> Result<Vec<usize>> {
        ValueSpaceResolver::new().resolve(&self.state)
    }

    pub fn learned_cardinalities(&self) -> &[usize] {
        self.state.learned_cardinalities()
    }

    pub fn observed_indices(&self) -> &[usize] {
        self.state.observed_indices()
    }
}

impl From<EncoderState> for OneHotEncoder {
    fn from(state: EncoderState) -> Self {
        Self::new(state)
    }
}

impl FeatureEncoder for OneHotEncoder {
    fn op_type(&self) -> OpType {
        OpType::Categorical
    }

    fn data_type(&self) -> Result<DataType> {
        let values: Vec<NumericValue> = self.values()?.into_iter().map(Into::into).collect();
        Ok(infer_data_type(&values, DataType::Integer))
    }

    fn encode_features<M>(
        &self,
        ids: &[String],
        input_features: &[InputFeature],
        mapper: &mut M,
    ) -> Result<Vec<BinaryIndicatorFeature>>
    where
        M: FeatureMapper + ?Sized,
    {
        FeatureExpander::new().expand(&self.state, ids, input_features, mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::feature::{IndexedCategoryFeature, RawNumericFeature};
    use crate::registry::ValueSpaceRegistry;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> ParameterSnapshot {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_one_hot_op_type_is_categorical() {
        let encoder = OneHotEncoder::new(EncoderState::explicit(vec![2]));
        assert_eq!(encoder.op_type(), OpType::Categorical);
    }

    #[test]
    fn test_one_hot_data_type_integer() {
        let encoder = OneHotEncoder::new(EncoderState::auto(vec![6], vec![0, 2, 5]));
        assert_eq!(encoder.data_type().unwrap(), DataType::Integer);
    }

    #[test]
    fn test_one_hot_data_type_defaults_when_empty() {
        let encoder = OneHotEncoder::new(EncoderState::explicit(vec![0]));
        assert_eq!(encoder.data_type().unwrap(), DataType::Integer);
    }

    #[test]
    fn test_one_hot_data_type_malformed_state() {
        let encoder = OneHotEncoder::new(EncoderState::explicit(vec![1, 1]));
        assert!(matches!(encoder.data_type(), Err(ExportError::Configuration(_))));
    }

    #[test]
    fn test_one_hot_values() {
        let encoder = OneHotEncoder::new(EncoderState::explicit(vec![4]));
        assert_eq!(encoder.values().unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(encoder.learned_cardinalities(), &[4]);
        assert!(encoder.observed_indices().is_empty());
    }

    #[test]
    fn test_one_hot_from_snapshot_and_encode() {
        let encoder = OneHotEncoder::from_snapshot(&snapshot(json!({
            "n_values": "auto",
            "n_values_": [6],
            "active_features_": [0, 2, 5],
        })))
        .unwrap();

        let input = [InputFeature::from(IndexedCategoryFeature::new(
            "color",
            ["red", "green", "blue", "yellow", "x", "black"],
        ))];
        let mut registry = ValueSpaceRegistry::new();

        let features = encoder
            .encode_features(&["onehot".to_string()], &input, &mut registry)
            .unwrap();

        let labels: Vec<&str> = features.iter().map(|f| f.value()).collect();
        assert_eq!(labels, vec!["red", "blue", "black"]);
        assert_eq!(registry.value_space("color").unwrap().len(), 3);
    }

    #[test]
    fn test_one_hot_from_snapshot_with_keys() {
        let keys = SnapshotKeys::new().with_learned_cardinalities("sizes");
        let snap = snapshot(json!({ "n_values": 2, "sizes": [2] }));
        let encoder = OneHotEncoder::from_snapshot_with_keys(&snap, &keys).unwrap();
        assert_eq!(encoder.values().unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_one_hot_encoders_share_registry() {
        let mut registry = ValueSpaceRegistry::new();
        let ids = ["onehot".to_string()];

        let origin = OneHotEncoder::from(EncoderState::explicit(vec![3]));
        let cylinders = OneHotEncoder::from(EncoderState::auto(vec![9], vec![3, 4, 6, 8]));

        origin
            .encode_features(
                &ids,
                &[InputFeature::from(RawNumericFeature::new("origin"))],
                &mut registry,
            )
            .unwrap();
        cylinders
            .encode_features(
                &ids,
                &[InputFeature::from(RawNumericFeature::new("cylinders"))],
                &mut registry,
            )
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.value_space("cylinders").unwrap(),
            &["3".to_string(), "4".to_string(), "6".to_string(), "8".to_string()]
        );
    }
}
