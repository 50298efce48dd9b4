//! Operational and data types attached to exported features.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How downstream consumers should treat a field's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpType {
    Categorical,
    Ordinal,
    Continuous,
}

/// Nominal representation of a field's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    String,
    Integer,
    Float,
    Double,
    Boolean,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// A single numeric parameter value as stored in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum NumericValue {
    Int(i64),
    Real(f64),
}

impl NumericValue {
    fn is_integral(&self) -> bool {
        match *self {
            NumericValue::Int(_) => true,
            NumericValue::Real(v) => v.is_finite() && v.fract() == 0.0,
        }
    }

    fn fits_f32(&self) -> bool {
        match *self {
            NumericValue::Int(v) => (v as f32) as i64 == v,
            NumericValue::Real(v) => !v.is_finite() || (v as f32) as f64 == v,
        }
    }
}

impl From<usize> for NumericValue {
    fn from(v: usize) -> Self {
        match i64::try_from(v) {
            Ok(i) => NumericValue::Int(i),
            Err(_) => NumericValue::Real(v as f64),
        }
    }
}

/// Returns the narrowest data type able to represent every value.
///
/// An empty sequence has nothing to narrow on and yields `default`.
pub fn infer_data_type(values: &[NumericValue], default: DataType) -> DataType {
    if values.is_empty() {
        return default;
    }

    if values.iter().all(NumericValue::is_integral) {
        return DataType::Integer;
    }

    if values.iter().all(NumericValue::fits_f32) {
        DataType::Float
    } else {
        DataType::Double
    }
}
