//! Host environment descriptors
//!
//! The JVM and operating system a distribution would run on. These are
//! captured once and passed explicitly to every predicate that depends on
//! them.

use crate::error::CompatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Java language level of a runtime (`1.6` and `6` are both level 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JavaVersion(u8);

impl JavaVersion {
    pub const JAVA_5: JavaVersion = JavaVersion(5);
    pub const JAVA_6: JavaVersion = JavaVersion(6);
    pub const JAVA_7: JavaVersion = JavaVersion(7);
    pub const JAVA_8: JavaVersion = JavaVersion(8);

    /// Parse `1.6`, `6`, `1.8.0_292` or `11.0.2` style version strings
    pub fn parse(version: &str) -> Result<Self, CompatError> {
        let invalid = || CompatError::JavaVersion(version.to_string());
        let mut parts = version.trim().split(['.', '_', '-']);
        let first = parts.next().ok_or_else(invalid)?;
        let level = if first == "1" {
            parts.next().ok_or_else(invalid)?
        } else {
            first
        };

        match level.parse::<u8>() {
            Ok(n) if n >= 1 => Ok(JavaVersion(n)),
            _ => Err(invalid()),
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Whether code targeting Java `level` runs on this runtime
    pub fn is_java_compatible(&self, level: u8) -> bool {
        self.0 >= level
    }

    pub fn is_java5_compatible(&self) -> bool {
        self.is_java_compatible(5)
    }

    pub fn is_java6_compatible(&self) -> bool {
        self.is_java_compatible(6)
    }
}

impl TryFrom<String> for JavaVersion {
    type Error = CompatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<JavaVersion> for String {
    fn from(version: JavaVersion) -> Self {
        version.to_string()
    }
}

impl FromStr for JavaVersion {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 < 9 {
            write!(f, "1.{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A Java runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JvmDescriptor {
    pub java_version: JavaVersion,
    /// IBM J9 runtimes broke a few historical releases
    #[serde(default)]
    pub ibm: bool,
}

impl JvmDescriptor {
    pub fn new(java_version: JavaVersion) -> Self {
        Self {
            java_version,
            ibm: false,
        }
    }

    /// Mark this runtime as an IBM JVM
    pub fn ibm(mut self) -> Self {
        self.ibm = true;
        self
    }

    pub fn is_ibm_jvm(&self) -> bool {
        self.ibm
    }
}

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    #[serde(alias = "macos", alias = "osx")]
    MacOsX,
    Linux,
    Solaris,
    FreeBsd,
    Other,
}

/// The host operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OsDescriptor {
    pub family: OsFamily,
}

impl OsDescriptor {
    pub fn new(family: OsFamily) -> Self {
        Self { family }
    }

    /// The family this binary was built for
    pub fn current() -> Self {
        Self::from_target_os(std::env::consts::OS)
    }

    /// Map a Rust target OS name (`std::env::consts::OS`) to a family
    pub fn from_target_os(os: &str) -> Self {
        let family = match os {
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::MacOsX,
            "linux" => OsFamily::Linux,
            "solaris" | "illumos" => OsFamily::Solaris,
            "freebsd" => OsFamily::FreeBsd,
            _ => OsFamily::Other,
        };
        Self { family }
    }

    pub fn is_windows(&self) -> bool {
        self.family == OsFamily::Windows
    }

    pub fn is_mac_os_x(&self) -> bool {
        self.family == OsFamily::MacOsX
    }

    pub fn is_linux(&self) -> bool {
        self.family == OsFamily::Linux
    }
}

/// JVM and OS a distribution is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostEnvironment {
    pub jvm: JvmDescriptor,
    pub os: OsDescriptor,
}

impl HostEnvironment {
    pub fn new(jvm: JvmDescriptor, os: OsDescriptor) -> Self {
        Self { jvm, os }
    }

    /// Host with the given JVM on the OS this binary was built for
    pub fn current(jvm: JvmDescriptor) -> Self {
        Self::new(jvm, OsDescriptor::current())
    }

    /// Load a host description:
    ///
    /// ```yaml
    /// jvm:
    ///   java_version: "1.6"
    ///   ibm: true
    /// os: windows
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, CompatError> {
        serde_yaml::from_str(yaml).map_err(|e| CompatError::Config(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CompatError> {
        serde_json::from_str(json).map_err(|e| CompatError::Config(e.to_string()))
    }
}
