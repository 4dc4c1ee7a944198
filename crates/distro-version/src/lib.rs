//! Distribution versions
//!
//! Parses and orders distribution version identifiers such as `1.0`,
//! `1.0-milestone-8a`, `2.0-rc-1` or `1.12-20140101000000+0100`, plus the
//! plain `major.minor` numbers used for on-disk layout versions.
//!
//! # Example
//!
//! ```
//! use distro_version::VersionIdentifier;
//!
//! let milestone: VersionIdentifier = "1.0-milestone-8".parse().unwrap();
//! let patched: VersionIdentifier = "1.0-milestone-8a".parse().unwrap();
//! let release: VersionIdentifier = "1.0".parse().unwrap();
//!
//! assert!(milestone < patched);
//! assert!(patched < release);
//! assert_eq!(patched.base_version(), release);
//! ```

pub mod error;
pub mod number;
pub mod version;

pub use error::VersionError;
pub use number::VersionNumber;
pub use version::{Stage, StageKind, VersionIdentifier};
