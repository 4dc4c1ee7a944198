//! Distribution under test
use distro_compat::{HostEnvironment, VersionCompatibilityOracle};
use distro_version::{VersionError, VersionIdentifier};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// An installed distribution a harness can run scenarios against.
///
/// Paths are recorded, never touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub version: VersionIdentifier,
    /// Unpacked installation directory
    pub home_dir: PathBuf,
    /// Binary distribution archive the home was unpacked from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_distribution: Option<PathBuf>,
}

impl Distribution {
    pub fn new(version: VersionIdentifier, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            version,
            home_dir: home_dir.into(),
            bin_distribution: None,
        }
    }

    /// Parse `version` and describe a distribution installed at `home_dir`
    pub fn parse(version: &str, home_dir: impl Into<PathBuf>) -> Result<Self, VersionError> {
        Ok(Self::new(VersionIdentifier::parse(version)?, home_dir))
    }

    pub fn with_bin_distribution(mut self, archive: impl Into<PathBuf>) -> Self {
        self.bin_distribution = Some(archive.into());
        self
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn bin_distribution(&self) -> Option<&Path> {
        self.bin_distribution.as_deref()
    }

    pub fn oracle(&self) -> VersionCompatibilityOracle {
        VersionCompatibilityOracle::new(self.version.clone())
    }

    /// Whether this distribution can run on `host`
    pub fn works_with(&self, host: &HostEnvironment) -> bool {
        self.oracle().works_with(host)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}
