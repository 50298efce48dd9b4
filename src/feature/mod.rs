//! Input and output features of an encoder expansion.
//!
//! Upstream stages hand the encoder one [`InputFeature`]; the encoder hands
//! back one [`BinaryIndicatorFeature`] per resolved category.

mod labeler;

pub use labeler::CategoryLabeler;

use crate::types::DataType;
use serde::{Deserialize, Serialize};

/// A feature whose categories are addressed by position in a label list.
///
/// Produced by categorical domain decorators and label encoders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedCategoryFeature {
    name: String,
    labels: Vec<String>,
}

impl IndexedCategoryFeature {
    pub fn new<S>(name: impl Into<String>, labels: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label stored at `index`, if any.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

/// A feature passed through without stored labels.
///
/// Category indices are the raw values themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNumericFeature {
    name: String,
}

impl RawNumericFeature {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A continuous numeric feature, e.g. the output of a scaler.
///
/// It carries no category identity and cannot feed a one-hot expansion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousFeature {
    name: String,
}

impl ContinuousFeature {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Every feature kind an upstream stage may produce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFeature {
    Indexed(IndexedCategoryFeature),
    RawNumeric(RawNumericFeature),
    Continuous(ContinuousFeature),
}

impl InputFeature {
    pub fn name(&self) -> &str {
        match self {
            InputFeature::Indexed(f) => f.name(),
            InputFeature::RawNumeric(f) => f.name(),
            InputFeature::Continuous(f) => f.name(),
        }
    }

    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            InputFeature::Indexed(_) => "indexed",
            InputFeature::RawNumeric(_) => "raw numeric",
            InputFeature::Continuous(_) => "continuous",
        }
    }
}

impl From<IndexedCategoryFeature> for InputFeature {
    fn from(f: IndexedCategoryFeature) -> Self {
        InputFeature::Indexed(f)
    }
}

impl From<RawNumericFeature> for InputFeature {
    fn from(f: RawNumericFeature) -> Self {
        InputFeature::RawNumeric(f)
    }
}

impl From<ContinuousFeature> for InputFeature {
    fn from(f: ContinuousFeature) -> Self {
        InputFeature::Continuous(f)
    }
}

/// A derived feature testing `name == value`.
///
/// Order within an expansion is positional: consumers zip it against model
/// coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryIndicatorFeature {
    name: String,
    data_type: DataType,
    value: String,
}

impl BinaryIndicatorFeature {
    pub fn new(name: impl Into<String>, data_type: DataType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type,
            value: value.into(),
        }
    }

    /// Name of the source feature.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Category label this indicator tests for.
    pub fn value(&self) -> &str {
        &self.value
    }
}
