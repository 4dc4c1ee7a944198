//! Registry errors
use distro_version::VersionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("REGISTRY/DUPLICATE: distribution {0} is already registered")]
    Duplicate(String),

    #[error("REGISTRY/CONFIG: {0}")]
    Config(String),
}
