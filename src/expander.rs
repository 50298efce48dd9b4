//! Expansion of one categorical input feature into binary indicators.

use crate::encoder::EncoderState;
use crate::error::{ExportError, Result};
use crate::feature::{BinaryIndicatorFeature, CategoryLabeler, InputFeature};
use crate::registry::FeatureMapper;
use crate::types::DataType;
use crate::value_space::ValueSpaceResolver;

/// Data type of every indicator's category value.
pub const INDICATOR_DATA_TYPE: DataType = DataType::String;

/// Turns encoder state plus one input feature into indicator features.
///
/// Expansion is all-or-nothing: on error no features are returned and the
/// mapper is left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureExpander {
    resolver: ValueSpaceResolver,
    labeler: CategoryLabeler,
}

impl FeatureExpander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `input_features[0]` using the categories recorded in `state`.
    ///
    /// The returned indicators follow category-index order, which matches
    /// the encoder's output column order. The finished category domain is
    /// written to `mapper` under the input feature's name.
    ///
    /// # Errors
    /// - [`ExportError::Configuration`] if `ids` or `input_features` does not
    ///   hold exactly one element, or the state is malformed.
    /// - [`ExportError::IndexOutOfRange`] / [`ExportError::UnsupportedFeatureKind`]
    ///   from labeling.
    pub fn expand<M>(
        &self,
        state: &EncoderState,
        ids: &[String],
        input_features: &[InputFeature],
        mapper: &mut M,
    ) -> Result<Vec<BinaryIndicatorFeature>>
    where
        M: FeatureMapper + ?Sized,
    {
        if ids.len() != 1 || input_features.len() != 1 {
            return Err(ExportError::config(format!(
                "expected exactly one id and one input feature, got {} and {}",
                ids.len(),
                input_features.len()
            )));
        }

        let input_feature = &input_features[0];
        let indices = self.resolver.resolve(state)?;

        let mut categories = Vec::with_capacity(indices.len());
        let mut features = Vec::with_capacity(indices.len());

        for index in indices {
            let category = self.labeler.label(input_feature, index)?;

            features.push(BinaryIndicatorFeature::new(
                input_feature.name(),
                INDICATOR_DATA_TYPE,
                category.as_str(),
            ));
            categories.push(category);
        }

        tracing::debug!(
            id = %ids[0],
            feature = input_feature.name(),
            mode = %state.mode(),
            categories = categories.len(),
            "expanded categorical feature"
        );

        mapper.update_value_space(input_feature.name(), categories);

        Ok(features)
    }
}
