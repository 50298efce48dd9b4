//! Fitted categorical encoders and their export seam.
//!
//! # Available Encoders
//!
//! ## OneHotEncoder
//! Expands one integer-coded categorical feature into one binary indicator
//! per learned category.
//!
//! ```ignore
//! // n_values="auto", active_features_=[0, 2, 5], labels [red, green, blue, yellow, x, black]
//! // -> indicators: color==red, color==blue, color==black
//! ```

mod one_hot;
mod state;
mod traits;

pub use one_hot::OneHotEncoder;
pub use state::{CardinalityMode, EncoderState};
pub use traits::FeatureEncoder;
