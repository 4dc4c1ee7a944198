//! Distribution registry
//!
//! The set of distributions a harness knows about, ordered oldest first.

use crate::distribution::Distribution;
use crate::error::RegistryError;
use crate::matrix::WrapperMatrix;
use distro_compat::{CompatibilityReport, HostEnvironment};
use distro_version::VersionIdentifier;
use std::path::PathBuf;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct DistributionRegistry {
    distributions: Vec<Distribution>,
}

impl DistributionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a JSON array of distributions
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let distributions: Vec<Distribution> =
            serde_json::from_str(json).map_err(|e| RegistryError::Config(e.to_string()))?;
        let mut registry = Self::new();
        for distribution in distributions {
            registry.register(distribution)?;
        }
        Ok(registry)
    }

    /// Add a distribution, keeping version order. Two distributions of the
    /// same version are rejected.
    pub fn register(&mut self, distribution: Distribution) -> Result<(), RegistryError> {
        match self
            .distributions
            .binary_search_by(|d| d.version.cmp(&distribution.version))
        {
            Ok(_) => Err(RegistryError::Duplicate(distribution.version.to_string())),
            Err(index) => {
                debug!(version = %distribution.version, home = %distribution.home_dir.display(), "distribution registered");
                self.distributions.insert(index, distribution);
                Ok(())
            }
        }
    }

    /// Register the distribution of `version` installed at `home_dir`
    pub fn register_version(
        &mut self,
        version: &str,
        home_dir: impl Into<PathBuf>,
    ) -> Result<(), RegistryError> {
        let distribution = Distribution::parse(version, home_dir)?;
        self.register(distribution)
    }

    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Distribution> {
        self.distributions.iter()
    }

    pub fn find(&self, version: &VersionIdentifier) -> Option<&Distribution> {
        self.distributions.iter().find(|d| d.version == *version)
    }

    pub fn newest(&self) -> Option<&Distribution> {
        self.distributions.last()
    }

    /// Distributions whose version works with the host JVM and OS
    pub fn runnable_on(&self, host: &HostEnvironment) -> Vec<&Distribution> {
        self.distributions
            .iter()
            .filter(|d| {
                let runnable = d.works_with(host);
                if !runnable {
                    trace!(version = %d.version, "skipping distribution for host");
                }
                runnable
            })
            .collect()
    }

    /// Compatibility report for every registered distribution
    pub fn reports(&self, host: &HostEnvironment) -> Vec<CompatibilityReport> {
        self.distributions
            .iter()
            .map(|d| d.oracle().report(host))
            .collect()
    }

    /// Which registered wrapper can launch which registered distribution
    pub fn wrapper_matrix(&self) -> WrapperMatrix {
        let mut matrix = WrapperMatrix::new();
        for wrapper in &self.distributions {
            let oracle = wrapper.oracle();
            let row = wrapper.version.as_str();
            matrix.ensure_row(row);
            for target in &self.distributions {
                if oracle.wrapper_can_execute(&target.version) {
                    matrix.insert(row, target.version.as_str());
                }
            }
        }
        debug!(wrappers = matrix.wrapper_pairs.len(), "wrapper matrix built");
        matrix
    }
}
