//! Distribution Registry: distributions under test and wrapper compatibility
//!
//! A harness registers the distributions it has installed, then asks which
//! of them can run on the current host and which wrapper can launch which
//! distribution.
//!
//! # Example
//!
//! ```
//! use distro_compat::{HostEnvironment, JavaVersion, JvmDescriptor, OsDescriptor, OsFamily};
//! use distro_registry::{Distribution, DistributionRegistry};
//!
//! let mut registry = DistributionRegistry::new();
//! registry.register(Distribution::parse("1.12", "/opt/dist/1.12").unwrap()).unwrap();
//! registry.register(Distribution::parse("2.0", "/opt/dist/2.0").unwrap()).unwrap();
//!
//! let java5 = HostEnvironment::new(
//!     JvmDescriptor::new(JavaVersion::JAVA_5),
//!     OsDescriptor::new(OsFamily::Linux),
//! );
//! let runnable: Vec<String> = registry.runnable_on(&java5).iter().map(|d| d.to_string()).collect();
//! assert_eq!(runnable, vec!["1.12"]);
//! ```

pub mod distribution;
pub mod error;
pub mod matrix;
pub mod registry;

pub use distribution::Distribution;
pub use error::RegistryError;
pub use matrix::WrapperMatrix;
pub use registry::DistributionRegistry;
