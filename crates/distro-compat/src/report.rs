//! Compatibility report
//!
//! Evaluates every predicate of an oracle against one host, so a harness can
//! log or persist the facts it based its run/skip decisions on.

use crate::error::CompatError;
use crate::host::HostEnvironment;
use crate::oracle::VersionCompatibilityOracle;
use crate::rules::Feature;
use distro_version::{VersionIdentifier, VersionNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub version: VersionIdentifier,
    pub host: HostEnvironment,
    pub works_with_jvm: bool,
    pub works_with_os: bool,
    pub daemon_supported: bool,
    pub daemon_idle_timeout_configurable: bool,
    pub open_api_supported: bool,
    pub tooling_api_supported: bool,
    pub tooling_api_non_ascii_output_supported: bool,
    pub supports_spaces_in_gradle_and_java_opts: bool,
    pub fully_supports_ivy_repository: bool,
    pub artifact_cache_layout_version: VersionNumber,
}

impl CompatibilityReport {
    /// The distribution can run on the host at all
    pub fn is_runnable(&self) -> bool {
        self.works_with_jvm && self.works_with_os
    }

    /// Names of version-gated features this distribution lacks
    pub fn missing_features(&self) -> Vec<&'static str> {
        Feature::ALL
            .iter()
            .filter(|feature| !self.feature_flag(**feature))
            .map(|feature| feature.name())
            .collect()
    }

    fn feature_flag(&self, feature: Feature) -> bool {
        match feature {
            Feature::DaemonIdleTimeoutConfigurable => self.daemon_idle_timeout_configurable,
            Feature::OpenApi => self.open_api_supported,
            Feature::ToolingApi => self.tooling_api_supported,
            Feature::SpacesInGradleAndJavaOpts => self.supports_spaces_in_gradle_and_java_opts,
            Feature::FullIvyRepositorySupport => self.fully_supports_ivy_repository,
        }
    }

    pub fn to_json(&self) -> Result<String, CompatError> {
        serde_json::to_string_pretty(self).map_err(|e| CompatError::Serialize(e.to_string()))
    }
}

impl fmt::Display for CompatibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let status = if self.is_runnable() { "RUNNABLE" } else { "UNSUPPORTED HOST" };
        write!(
            f,
            "{} [{}] cache layout {}",
            self.version, status, self.artifact_cache_layout_version
        )?;
        let missing = self.missing_features();
        if !missing.is_empty() {
            write!(f, ", missing: {}", missing.join(", "))?;
        }
        Ok(())
    }
}

impl VersionCompatibilityOracle {
    /// Evaluate every predicate against `host`
    pub fn report(&self, host: &HostEnvironment) -> CompatibilityReport {
        let report = CompatibilityReport {
            version: self.version().clone(),
            host: *host,
            works_with_jvm: self.works_with_jvm(&host.jvm),
            works_with_os: self.works_with_os(&host.os),
            daemon_supported: self.is_daemon_supported(&host.jvm, &host.os),
            daemon_idle_timeout_configurable: self.is_daemon_idle_timeout_configurable(),
            open_api_supported: self.is_open_api_supported(),
            tooling_api_supported: self.is_tooling_api_supported(),
            tooling_api_non_ascii_output_supported: self
                .is_tooling_api_non_ascii_output_supported(&host.os),
            supports_spaces_in_gradle_and_java_opts: self
                .is_supports_spaces_in_gradle_and_java_opts(),
            fully_supports_ivy_repository: self.is_fully_supports_ivy_repository(),
            artifact_cache_layout_version: self.artifact_cache_layout_version(),
        };
        debug!(report = %report, "compatibility report");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{JavaVersion, JvmDescriptor, OsDescriptor, OsFamily};

    fn linux_java6() -> HostEnvironment {
        HostEnvironment::new(
            JvmDescriptor::new(JavaVersion::JAVA_6),
            OsDescriptor::new(OsFamily::Linux),
        )
    }

    #[test]
    fn test_report_for_modern_release() {
        let report = VersionCompatibilityOracle::parse("1.12")
            .unwrap()
            .report(&linux_java6());
        assert!(report.is_runnable());
        assert!(report.daemon_supported);
        assert!(report.missing_features().is_empty());
        assert_eq!(report.artifact_cache_layout_version.to_string(), "2.6");
    }

    #[test]
    fn test_report_lists_missing_features() {
        let report = VersionCompatibilityOracle::parse("0.9")
            .unwrap()
            .report(&linux_java6());
        assert_eq!(
            report.missing_features(),
            vec![
                "daemon_idle_timeout_configurable",
                "tooling_api",
                "spaces_in_gradle_and_java_opts",
                "full_ivy_repository_support",
            ]
        );
        assert!(report.to_string().contains("missing: daemon_idle_timeout_configurable"));
    }

    #[test]
    fn test_report_json() {
        let report = VersionCompatibilityOracle::parse("2.0")
            .unwrap()
            .report(&linux_java6());
        let json = report.to_json().unwrap();
        assert!(json.contains("\"version\": \"2.0\""));
        assert!(json.contains("\"artifact_cache_layout_version\": \"2.12\""));

        let back: CompatibilityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
