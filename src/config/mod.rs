// ABOUTME: Build and fleet specification documents (validated input).
// ABOUTME: JSON parsing with AWS-style keys; both documents load before any network call.

mod build;
mod fleet;

pub use build::{BuildSpec, StorageLocation, Tag};
pub use fleet::{
    AnywhereConfiguration, CertificateConfiguration, FleetSpec, IpPermission, LocationEntry,
    ResourceCreationLimitPolicy, RuntimeConfiguration, ServerProcess,
};

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

impl BuildSpec {
    /// Load a build document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::SpecNotFound` if the file is missing and
    /// `Error::InvalidSpec` if it does not parse as a build document.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = read_spec(path)?;
        serde_json::from_str(&raw).map_err(|e| Error::InvalidSpec {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl FleetSpec {
    /// Load a fleet document from a JSON file.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`BuildSpec::from_path`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = read_spec(path)?;
        serde_json::from_str(&raw).map_err(|e| Error::InvalidSpec {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn read_spec(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::SpecNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(Error::Io)
}
