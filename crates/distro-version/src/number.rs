//! Plain version numbers (`major.minor[.micro][-qualifier]`), used for
//! internal format versions such as the artifact cache layout.

use crate::error::VersionError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:[-.](.+))?$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub qualifier: Option<String>,
}

impl VersionNumber {
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: None,
        }
    }

    pub fn parse(number: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::InvalidNumber(number.to_string());
        let captures = NUMBER_PATTERN.captures(number).ok_or_else(invalid)?;
        let part = |index: usize| -> Result<u32, VersionError> {
            match captures.get(index) {
                Some(m) => m.as_str().parse().map_err(|_| invalid()),
                None => Ok(0),
            }
        };

        Ok(Self {
            major: part(1)?,
            minor: part(2)?,
            micro: part(3)?,
            qualifier: captures.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.micro)
            .cmp(&(other.major, other.minor, other.micro))
            .then_with(|| match (&self.qualifier, &other.qualifier) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(l), Some(r)) => l.cmp(r),
            })
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for VersionNumber {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.micro != 0 {
            write!(f, ".{}", self.micro)?;
        }
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{}", qualifier)?;
        }
        Ok(())
    }
}

impl Serialize for VersionNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
