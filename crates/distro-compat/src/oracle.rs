//! Version compatibility oracle
//!
//! Answers "does this distribution version support X / suffer from defect Y"
//! for a single version. All rules reduce to three primitives:
//! [`is_version`](VersionCompatibilityOracle::is_version),
//! [`is_same_or_newer`](VersionCompatibilityOracle::is_same_or_newer) and
//! [`is_same_or_older`](VersionCompatibilityOracle::is_same_or_older).

use crate::host::{HostEnvironment, JvmDescriptor, OsDescriptor};
use crate::rules::{
    self, known, Feature, UpperBound, VersionWindow, CACHE_LAYOUT_RULES, FALLBACK_CACHE_LAYOUT,
};
use crate::wrapper;
use distro_version::{VersionError, VersionIdentifier, VersionNumber};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Compatibility knowledge about one distribution version.
///
/// Immutable; safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionCompatibilityOracle {
    version: VersionIdentifier,
}

impl VersionCompatibilityOracle {
    pub fn new(version: VersionIdentifier) -> Self {
        debug!(version = %version, "compatibility oracle created");
        Self { version }
    }

    /// Build an oracle from version text, failing fast on malformed input
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        VersionIdentifier::parse(version).map(Self::new)
    }

    pub fn version(&self) -> &VersionIdentifier {
        &self.version
    }

    // === Comparison primitives ===

    /// Same version, where a snapshot also matches anything sharing its base
    /// version.
    pub fn is_version(&self, other: &VersionIdentifier) -> bool {
        self.version.cmp(other) == Ordering::Equal
            || (self.version.is_snapshot() && self.version.base_version() == other.base_version())
    }

    pub fn is_same_or_newer(&self, other: &VersionIdentifier) -> bool {
        self.is_version(other) || self.version > *other
    }

    pub fn is_same_or_older(&self, other: &VersionIdentifier) -> bool {
        self.is_version(other) || self.version <= *other
    }

    /// Whether the held version falls inside `window`, checking both bounds
    /// when the window has an upper edge.
    pub fn is_within(&self, window: &VersionWindow) -> bool {
        let lower = self.is_same_or_newer(&known(window.since));
        let upper = match window.until {
            None => true,
            Some(UpperBound::Before(until)) => !self.is_same_or_newer(&known(until)),
            Some(UpperBound::Through(until)) => self.is_same_or_older(&known(until)),
        };
        lower && upper
    }

    fn is(&self, literal: &'static str) -> bool {
        self.is_version(&known(literal))
    }

    fn since(&self, literal: &'static str) -> bool {
        self.is_same_or_newer(&known(literal))
    }

    // === Host compatibility ===

    pub fn works_with_jvm(&self, jvm: &JvmDescriptor) -> bool {
        if jvm.is_ibm_jvm() && self.is(rules::IBM_JVM_BROKEN) {
            return false;
        }
        let java = jvm.java_version;
        if self.is(rules::JAVA5_BROKEN) {
            return java.is_java6_compatible();
        }
        if self.is_same_or_older(&known(rules::LAST_JAVA5_LINE)) {
            return java.is_java5_compatible();
        }
        java.is_java6_compatible()
    }

    pub fn works_with_os(&self, os: &OsDescriptor) -> bool {
        if self.is(rules::JNA_REQUIRED) {
            return os.is_windows() || os.is_mac_os_x() || os.is_linux();
        }
        true
    }

    /// Both the JVM and the OS of `host` can run this version
    pub fn works_with(&self, host: &HostEnvironment) -> bool {
        self.works_with_jvm(&host.jvm) && self.works_with_os(&host.os)
    }

    pub fn is_daemon_supported(&self, jvm: &JvmDescriptor, os: &OsDescriptor) -> bool {
        if jvm.is_ibm_jvm() && self.is(rules::IBM_DAEMON_BROKEN) {
            return false;
        }
        if os.is_windows() {
            self.since(rules::WINDOWS_DAEMON_SINCE)
        } else {
            self.since(rules::DAEMON_SINCE)
        }
    }

    pub fn is_tooling_api_non_ascii_output_supported(&self, os: &OsDescriptor) -> bool {
        if os.is_windows() {
            return !rules::WINDOWS_NON_ASCII_OUTPUT_BROKEN
                .iter()
                .any(|broken| self.is(*broken));
        }
        true
    }

    // === Version-gated features ===

    pub fn supports(&self, feature: Feature) -> bool {
        self.is_within(&feature.window())
    }

    pub fn is_daemon_idle_timeout_configurable(&self) -> bool {
        self.supports(Feature::DaemonIdleTimeoutConfigurable)
    }

    pub fn is_open_api_supported(&self) -> bool {
        self.supports(Feature::OpenApi)
    }

    pub fn is_tooling_api_supported(&self) -> bool {
        self.supports(Feature::ToolingApi)
    }

    pub fn is_supports_spaces_in_gradle_and_java_opts(&self) -> bool {
        self.supports(Feature::SpacesInGradleAndJavaOpts)
    }

    pub fn is_fully_supports_ivy_repository(&self) -> bool {
        self.supports(Feature::FullIvyRepositorySupport)
    }

    // === Formats ===

    /// On-disk artifact cache layout written by this version
    pub fn artifact_cache_layout_version(&self) -> VersionNumber {
        for rule in CACHE_LAYOUT_RULES {
            if self.is_within(&rule.window) {
                trace!(version = %self.version, since = rule.window.since, layout = %rule.layout, "cache layout matched");
                return rule.layout.clone();
            }
        }
        FALLBACK_CACHE_LAYOUT
    }

    // === Wrapper ===

    /// Whether this version's wrapper can launch distribution `other`
    pub fn wrapper_can_execute(&self, other: &VersionIdentifier) -> bool {
        let breaking = known(rules::WRAPPER_BREAKING_RELEASE);
        if *other == *breaking || self.is_version(&breaking) {
            return false;
        }
        if self.is(rules::WRAPPER_TIMEZONE_DEFECT) {
            return wrapper::matches_timezone_pattern(other.as_str());
        }
        if self.is_within(&rules::WRAPPER_MILESTONE_PATCH_DEFECT)
            && wrapper::is_patched_milestone_build(other.as_str())
        {
            return false;
        }
        true
    }
}

impl From<VersionIdentifier> for VersionCompatibilityOracle {
    fn from(version: VersionIdentifier) -> Self {
        Self::new(version)
    }
}
