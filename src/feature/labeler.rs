//! Category index to label resolution.

use super::InputFeature;
use crate::error::{ExportError, Result};

/// Resolves a category index to its string label.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryLabeler;

impl CategoryLabeler {
    pub fn new() -> Self {
        Self
    }

    /// Label for `index` as seen through `feature`.
    ///
    /// Indexed features look the label up; raw numeric features render the
    /// index in plain base 10.
    pub fn label(&self, feature: &InputFeature, index: usize) -> Result<String> {
        match feature {
            InputFeature::Indexed(f) => {
                f.label(index)
                    .map(str::to_owned)
                    .ok_or_else(|| ExportError::IndexOutOfRange {
                        feature: f.name().to_string(),
                        index,
                        len: f.labels().len(),
                    })
            }
            InputFeature::RawNumeric(_) => Ok(index.to_string()),
            InputFeature::Continuous(f) => Err(ExportError::UnsupportedFeatureKind {
                feature: f.name().to_string(),
                kind: feature.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{ContinuousFeature, IndexedCategoryFeature, RawNumericFeature};

    #[test]
    fn test_indexed_label() {
        let feature = IndexedCategoryFeature::new("color", ["red", "green", "blue"]).into();
        let labeler = CategoryLabeler::new();
        assert_eq!(labeler.label(&feature, 0).unwrap(), "red");
        assert_eq!(labeler.label(&feature, 2).unwrap(), "blue");
    }

    #[test]
    fn test_indexed_out_of_range() {
        let feature = IndexedCategoryFeature::new("color", ["red"]).into();
        let result = CategoryLabeler::new().label(&feature, 1);
        assert!(matches!(
            result,
            Err(ExportError::IndexOutOfRange { index: 1, len: 1, .. })
        ));
    }

    #[test]
    fn test_raw_numeric_label() {
        let feature = RawNumericFeature::new("origin").into();
        let labeler = CategoryLabeler::new();
        assert_eq!(labeler.label(&feature, 0).unwrap(), "0");
        assert_eq!(labeler.label(&feature, 1234567).unwrap(), "1234567");
    }

    #[test]
    fn test_continuous_unsupported() {
        let feature = ContinuousFeature::new("weight").into();
        let result = CategoryLabeler::new().label(&feature, 0);
        assert!(matches!(
            result,
            Err(ExportError::UnsupportedFeatureKind { kind: "continuous", .. })
        ));
    }
}
