//! Historical rule tables
//!
//! Every version literal below is a release where some behavior changed or
//! broke. The tables are plain data; [`crate::VersionCompatibilityOracle`]
//! evaluates them with its three comparison primitives only.

use distro_version::{VersionIdentifier, VersionNumber};
use lazy_static::lazy_static;
use std::borrow::Cow;
use std::collections::HashMap;

/// Upper edge of a [`VersionWindow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// The window closes once this version is reached (NOT same-or-newer)
    Before(&'static str),
    /// The window includes this version (same-or-older)
    Through(&'static str),
}

/// A contiguous range of versions, open-ended unless `until` is set.
///
/// Two-sided windows always check both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionWindow {
    /// Inclusive lower bound (same-or-newer)
    pub since: &'static str,
    pub until: Option<UpperBound>,
}

impl VersionWindow {
    pub const fn since(since: &'static str) -> Self {
        Self { since, until: None }
    }

    pub const fn before(self, version: &'static str) -> Self {
        Self {
            since: self.since,
            until: Some(UpperBound::Before(version)),
        }
    }

    pub const fn through(self, version: &'static str) -> Self {
        Self {
            since: self.since,
            until: Some(UpperBound::Through(version)),
        }
    }
}

/// A capability gated purely on the distribution version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    DaemonIdleTimeoutConfigurable,
    OpenApi,
    ToolingApi,
    SpacesInGradleAndJavaOpts,
    FullIvyRepositorySupport,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::DaemonIdleTimeoutConfigurable,
        Feature::OpenApi,
        Feature::ToolingApi,
        Feature::SpacesInGradleAndJavaOpts,
        Feature::FullIvyRepositorySupport,
    ];

    pub fn window(self) -> VersionWindow {
        match self {
            Feature::DaemonIdleTimeoutConfigurable => VersionWindow::since("1.0-milestone-7"),
            // Removed for the whole 2.0 line, pre-releases included
            Feature::OpenApi => VersionWindow::since("0.9-rc-1").before("2.0-milestone-1"),
            Feature::ToolingApi => VersionWindow::since("1.0-milestone-3"),
            Feature::SpacesInGradleAndJavaOpts => VersionWindow::since("1.0-milestone-5"),
            Feature::FullIvyRepositorySupport => VersionWindow::since("1.0-milestone-7"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::DaemonIdleTimeoutConfigurable => "daemon_idle_timeout_configurable",
            Feature::OpenApi => "open_api",
            Feature::ToolingApi => "tooling_api",
            Feature::SpacesInGradleAndJavaOpts => "spaces_in_gradle_and_java_opts",
            Feature::FullIvyRepositorySupport => "full_ivy_repository_support",
        }
    }
}

/// One row of the artifact cache layout cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRule {
    pub window: VersionWindow,
    pub layout: VersionNumber,
}

/// Artifact cache layouts, newest first. Each row's upper bound is the
/// previous row's lower bound; the first matching row wins.
pub const CACHE_LAYOUT_RULES: &[LayoutRule] = &[
    LayoutRule {
        window: VersionWindow::since("2.0-rc-1"),
        layout: VersionNumber::new(2, 12, 0),
    },
    LayoutRule {
        window: VersionWindow::since("1.12-rc-1").before("2.0-rc-1"),
        layout: VersionNumber::new(2, 6, 0),
    },
    LayoutRule {
        window: VersionWindow::since("1.11-rc-1").before("1.12-rc-1"),
        layout: VersionNumber::new(2, 2, 0),
    },
    LayoutRule {
        window: VersionWindow::since("1.9-rc-2").before("1.11-rc-1"),
        layout: VersionNumber::new(2, 1, 0),
    },
    LayoutRule {
        window: VersionWindow::since("1.9-rc-1").before("1.9-rc-2"),
        layout: VersionNumber::new(1, 31, 0),
    },
    LayoutRule {
        window: VersionWindow::since("1.7-rc-1").before("1.9-rc-1"),
        layout: VersionNumber::new(0, 26, 0),
    },
    LayoutRule {
        window: VersionWindow::since("1.6-rc-1").before("1.7-rc-1"),
        layout: VersionNumber::new(0, 24, 0),
    },
    LayoutRule {
        window: VersionWindow::since("1.4-rc-1").before("1.6-rc-1"),
        layout: VersionNumber::new(0, 23, 0),
    },
    LayoutRule {
        window: VersionWindow::since("1.3").before("1.4-rc-1"),
        layout: VersionNumber::new(0, 15, 0),
    },
];

/// Layout of every distribution older than the first cascade row
pub const FALLBACK_CACHE_LAYOUT: VersionNumber = VersionNumber::new(0, 1, 0);

// Named defects and thresholds

/// Could not start on the IBM JVM
pub const IBM_JVM_BROKEN: &str = "1.0-milestone-4";
/// Shipped classes that required Java 6
pub const JAVA5_BROKEN: &str = "0.9-rc-1";
/// Last line that ran on Java 5
pub const LAST_JAVA5_LINE: &str = "1.12";
/// Needed native JNA support, only present on the big three
pub const JNA_REQUIRED: &str = "1.0-milestone-5";

/// Daemon could not start on the IBM JVM
pub const IBM_DAEMON_BROKEN: &str = "1.0-milestone-7";
pub const DAEMON_SINCE: &str = "0.9";
pub const WINDOWS_DAEMON_SINCE: &str = "1.0-milestone-4";

/// Tooling API mangled non-ASCII output on Windows
pub const WINDOWS_NON_ASCII_OUTPUT_BROKEN: &[&str] =
    &["1.0-milestone-7", "1.0-milestone-8", "1.0-milestone-8a"];

/// Wrapper format changed incompatibly after this release
pub const WRAPPER_BREAKING_RELEASE: &str = "0.8";
/// Wrapper gated every launch on a timezone pattern that never matches
pub const WRAPPER_TIMEZONE_DEFECT: &str = "0.9.1";
/// Wrappers that could not launch patched milestones
pub const WRAPPER_MILESTONE_PATCH_DEFECT: VersionWindow =
    VersionWindow::since("0.9.2").through("1.0-milestone-2");

impl VersionWindow {
    fn literals(&self) -> impl Iterator<Item = &'static str> {
        let until = match self.until {
            Some(UpperBound::Before(v)) | Some(UpperBound::Through(v)) => Some(v),
            None => None,
        };
        std::iter::once(self.since).chain(until)
    }
}

/// Every version literal the tables above refer to
fn rule_literals() -> Vec<&'static str> {
    let mut literals = vec![
        IBM_JVM_BROKEN,
        JAVA5_BROKEN,
        LAST_JAVA5_LINE,
        JNA_REQUIRED,
        IBM_DAEMON_BROKEN,
        DAEMON_SINCE,
        WINDOWS_DAEMON_SINCE,
        WRAPPER_BREAKING_RELEASE,
        WRAPPER_TIMEZONE_DEFECT,
    ];
    literals.extend_from_slice(WINDOWS_NON_ASCII_OUTPUT_BROKEN);
    literals.extend(WRAPPER_MILESTONE_PATCH_DEFECT.literals());
    for feature in Feature::ALL {
        literals.extend(feature.window().literals());
    }
    for rule in CACHE_LAYOUT_RULES {
        literals.extend(rule.window.literals());
    }
    literals
}

fn parse_literal(literal: &'static str) -> VersionIdentifier {
    match VersionIdentifier::parse(literal) {
        Ok(version) => version,
        Err(err) => panic!("rule table literal: {}", err),
    }
}

lazy_static! {
    /// Rule table literals, parsed once
    static ref RULE_VERSIONS: HashMap<&'static str, VersionIdentifier> = rule_literals()
        .into_iter()
        .map(|literal| (literal, parse_literal(literal)))
        .collect();
}

/// Parsed form of a version literal. Table literals come from the parsed
/// cache; caller-built windows are parsed on demand.
///
/// All table literals are exercised by `test_all_literals_parse`.
pub(crate) fn known(literal: &'static str) -> Cow<'static, VersionIdentifier> {
    match RULE_VERSIONS.get(literal) {
        Some(version) => Cow::Borrowed(version),
        None => Cow::Owned(parse_literal(literal)),
    }
}
