//! Binary persistence of loaded encoder parameters.
//!
//! Peripheral to expansion, which never touches files. A parameter snapshot
//! is usually parsed once from JSON; caching the resulting state lets an
//! export job be re-run without the snapshot loader.

use crate::error::{ExportError, Result};
use std::path::Path;

/// A parameter representation that can be written to and read from bytes.
///
/// Implementors should hold plain data only (integers, strings, enums).
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> std::result::Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, Self::Error>;

    /// Save the parameters to a file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self
            .to_bytes()
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load parameters previously written by [`SerializableParams::save_to_file`].
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> std::result::Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}
