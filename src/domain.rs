//! Invalid-value policies used by domain decorators.

use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a decorated field does with a value outside its registered domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidValueTreatment {
    /// Pass the value through unchanged.
    AsIs,
    /// Treat the value as missing.
    AsMissing,
    /// Fail the evaluation.
    ReturnInvalid,
}

/// Parse a lowercase policy token.
pub fn parse_invalid_value_treatment(token: &str) -> Result<InvalidValueTreatment, ExportError> {
    match token {
        "as_is" => Ok(InvalidValueTreatment::AsIs),
        "as_missing" => Ok(InvalidValueTreatment::AsMissing),
        "return_invalid" => Ok(InvalidValueTreatment::ReturnInvalid),
        other => Err(ExportError::config(format!(
            "unknown invalid value treatment '{}'",
            other
        ))),
    }
}

impl FromStr for InvalidValueTreatment {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_invalid_value_treatment(s)
    }
}

impl fmt::Display for InvalidValueTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            InvalidValueTreatment::AsIs => "as_is",
            InvalidValueTreatment::AsMissing => "as_missing",
            InvalidValueTreatment::ReturnInvalid => "return_invalid",
        };
        f.write_str(token)
    }
}
