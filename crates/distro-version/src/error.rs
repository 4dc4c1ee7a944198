//! Version parsing errors
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("VERSION/INVALID: '{0}' is not a valid version string (examples: '1.0', '1.0-rc-1')")]
    Invalid(String),

    #[error("VERSION/TIMESTAMP: '{0}' is not a valid snapshot timestamp")]
    Timestamp(String),

    #[error("VERSION/NUMBER: '{0}' is not a valid version number (examples: '0.1', '2.12')")]
    InvalidNumber(String),
}
