//! Core trait for exporting fitted encoders.

use crate::error::Result;
use crate::feature::{BinaryIndicatorFeature, InputFeature};
use crate::registry::FeatureMapper;
use crate::types::{DataType, OpType};

/// A fitted encoder that can describe itself as derived features.
///
/// Implementors hold learned parameters only; they never refit and every call
/// works over the same immutable snapshot.
pub trait FeatureEncoder {
    /// Operational type of the encoder's output.
    fn op_type(&self) -> OpType;

    /// Nominal data type of the raw category values.
    ///
    /// # Errors
    /// Fails when the learned parameters are malformed.
    fn data_type(&self) -> Result<DataType>;

    /// Produce the derived features for `input_features`.
    ///
    /// `ids` names the output slots. The encoder writes the domains it
    /// finalizes to `mapper`.
    fn encode_features<M>(
        &self,
        ids: &[String],
        input_features: &[InputFeature],
        mapper: &mut M,
    ) -> Result<Vec<BinaryIndicatorFeature>>
    where
        M: FeatureMapper + ?Sized;
}
