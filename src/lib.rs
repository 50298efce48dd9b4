//! # onehot-export
//!
//! Exports the learned parameters of a fitted one-hot encoder as a declarative
//! feature-expansion plan for a model-export pipeline.
//!
//! ## Core Design Principles
//!
//! - **Snapshot In, Plan Out**: Encoders are built once from an immutable
//!   parameter snapshot and never refit.
//! - **Closed Feature Kinds**: Input features are a closed enum, so supporting a
//!   new upstream kind is a compile-time decision.
//! - **Explicit Registry**: Category domains are written to a registry handle the
//!   caller passes in. Nothing is global.
//! - **All-or-Nothing**: A failed expansion returns no features and writes
//!   nothing.
//!
//! ## Quick Start
//!
//! ```rust
//! use onehot_export::encoder::{EncoderState, FeatureEncoder, OneHotEncoder};
//! use onehot_export::feature::{IndexedCategoryFeature, InputFeature};
//! use onehot_export::registry::ValueSpaceRegistry;
//!
//! // Encoder fitted with n_values="auto" that saw categories 0, 2 and 5
//! let encoder = OneHotEncoder::new(EncoderState::auto(vec![6], vec![0, 2, 5]));
//!
//! let input = [InputFeature::from(IndexedCategoryFeature::new(
//!     "color",
//!     ["red", "green", "blue", "yellow", "x", "black"],
//! ))];
//! let mut registry = ValueSpaceRegistry::new();
//!
//! let features = encoder
//!     .encode_features(&["color".to_string()], &input, &mut registry)
//!     .unwrap();
//!
//! let labels: Vec<&str> = features.iter().map(|f| f.value()).collect();
//! assert_eq!(labels, ["red", "blue", "black"]);
//! assert_eq!(registry.value_space("color").unwrap().len(), 3);
//! ```
//!
//! ## Module Structure
//!
//! - `encoder` — Encoder state, the `FeatureEncoder` seam and `OneHotEncoder`
//! - `value_space` — Category index resolution (auto vs explicit mode)
//! - `feature` — Input feature kinds, indicator features and labeling
//! - `expander` — Orchestration of resolution, labeling and registration
//! - `registry` — Category domain registry
//! - `snapshot` — Loading encoder state from stored parameters
//! - `domain` — Invalid-value policies for domain decorators
//! - `types` — Op/data types and numeric type inference
//!
//! Expansion itself performs no I/O. Outside the expansion path,
//! `serialization` can cache a loaded `EncoderState` to a bincode file.

/// Fitted encoders and their export trait.
pub mod encoder;

pub mod domain;

/// Error types shared by every module.
pub mod error;

pub mod expander;

/// Input and output feature types.
pub mod feature;

/// Category domain registry.
pub mod registry;

/// Optional bincode caching of loaded state; not used during expansion.
pub mod serialization;

/// Encoder state loading from parameter snapshots.
pub mod snapshot;

pub mod types;

/// Category index resolution.
pub mod value_space;

pub use domain::{parse_invalid_value_treatment, InvalidValueTreatment};
pub use encoder::{CardinalityMode, EncoderState, FeatureEncoder, OneHotEncoder};
pub use error::{ExportError, Result};
pub use expander::FeatureExpander;
pub use feature::{
    BinaryIndicatorFeature, CategoryLabeler, ContinuousFeature, IndexedCategoryFeature,
    InputFeature, RawNumericFeature,
};
pub use registry::{FeatureMapper, ValueSpaceRegistry};
pub use snapshot::{ParameterSnapshot, SnapshotKeys};
pub use types::{DataType, OpType};
pub use value_space::ValueSpaceResolver;
