//! Distribution compatibility knowledge
//!
//! Historical facts about distribution versions for integration-test
//! harnesses: which JVMs and operating systems a version runs on, which
//! features it has, which known defects apply and which on-disk formats it
//! writes. Everything is a pure function of a version and an explicit host
//! description.
//!
//! # Example
//!
//! ```
//! use distro_compat::{
//!     HostEnvironment, JavaVersion, JvmDescriptor, OsDescriptor, OsFamily,
//!     VersionCompatibilityOracle,
//! };
//!
//! let oracle = VersionCompatibilityOracle::parse("1.0-milestone-4").unwrap();
//! let host = HostEnvironment::new(
//!     JvmDescriptor::new(JavaVersion::JAVA_6).ibm(),
//!     OsDescriptor::new(OsFamily::Linux),
//! );
//!
//! assert!(!oracle.works_with(&host));
//! assert!(oracle.is_tooling_api_supported());
//! assert_eq!(oracle.artifact_cache_layout_version().to_string(), "0.1");
//! ```
//!
//! # Host configuration
//!
//! ```
//! use distro_compat::HostEnvironment;
//!
//! let host = HostEnvironment::from_yaml("jvm:\n  java_version: '1.5'\nos: windows\n").unwrap();
//! assert!(host.os.is_windows());
//! assert!(!host.jvm.java_version.is_java6_compatible());
//! ```

pub mod error;
pub mod host;
pub mod oracle;
pub mod report;
pub mod rules;
pub mod wrapper;

pub use error::CompatError;
pub use host::{HostEnvironment, JavaVersion, JvmDescriptor, OsDescriptor, OsFamily};
pub use oracle::VersionCompatibilityOracle;
pub use report::CompatibilityReport;
pub use rules::{Feature, LayoutRule, UpperBound, VersionWindow};

pub use distro_version::{VersionError, VersionIdentifier, VersionNumber};
