//! Compatibility error model
use distro_version::VersionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompatError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("HOST/JAVA_VERSION: '{0}' is not a valid Java version (examples: '1.6', '8', '11.0.2')")]
    JavaVersion(String),

    #[error("HOST/CONFIG: {0}")]
    Config(String),

    #[error("REPORT/SERIALIZE: {0}")]
    Serialize(String),
}
