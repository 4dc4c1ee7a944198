//! Version identifiers for distributions.
//!
//! A version is a dotted numeric part, an optional pre-release stage and an
//! optional snapshot marker:
//!
//! ```text
//! 1.0-milestone-8a-20120101000000+0100
//! └┬┘ └──────┬───┘ └───────┬─────────┘
//! numeric  stage        snapshot
//! ```

use crate::error::VersionError;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

lazy_static! {
    static ref VERSION_PATTERN: Regex = Regex::new(
        r"^(\d+(?:\.\d+)+)(?:-([a-zA-Z]+)-(\d+)([a-z])?)?(?:-(SNAPSHOT|\d{14}([-+]\d{4})?))?$"
    ).unwrap();
}

/// Marker value for snapshots without a build timestamp.
const UNTIMED_SNAPSHOT: i64 = 0;

/// Kind of pre-release stage, in release order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Milestone,
    /// Any other alphabetic stage name (`alpha`, `beta`, `snapshot`, ...)
    Other,
    Preview,
    #[serde(rename = "rc")]
    ReleaseCandidate,
}

impl StageKind {
    fn from_name(name: &str) -> Self {
        match name {
            "milestone" => StageKind::Milestone,
            "preview" => StageKind::Preview,
            "rc" => StageKind::ReleaseCandidate,
            _ => StageKind::Other,
        }
    }
}

/// A pre-release stage such as `milestone-8a` or `rc-1`.
///
/// Field order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stage {
    pub kind: StageKind,
    pub number: u32,
    /// Patch letter of a re-spun stage (`8a`)
    pub patch: Option<char>,
}

/// A validated distribution version.
///
/// Ordering is semantic: `1.0-milestone-8 < 1.0-milestone-8a < 1.0-rc-1 < 1.0`,
/// and a snapshot sorts before the same version without one. Equality is
/// ordering equality; the raw text is kept for display and for rules that
/// match on it.
#[derive(Debug, Clone)]
pub struct VersionIdentifier {
    raw: String,
    numeric: Vec<u64>,
    stage: Option<Stage>,
    /// Build time in epoch millis, `UNTIMED_SNAPSHOT` for plain markers
    snapshot: Option<i64>,
}

impl VersionIdentifier {
    /// Parse a version string, failing on anything that does not follow the
    /// version grammar.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let captures = VERSION_PATTERN
            .captures(version)
            .ok_or_else(|| VersionError::Invalid(version.to_string()))?;

        let numeric = captures[1]
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| VersionError::Invalid(version.to_string()))?;

        let stage = match (captures.get(2), captures.get(3)) {
            (Some(name), Some(number)) => Some(Stage {
                kind: StageKind::from_name(name.as_str()),
                number: number
                    .as_str()
                    .parse()
                    .map_err(|_| VersionError::Invalid(version.to_string()))?,
                patch: captures.get(4).and_then(|m| m.as_str().chars().next()),
            }),
            _ => None,
        };

        let snapshot = match captures.get(5).map(|m| m.as_str()) {
            _ if captures.get(2).map(|m| m.as_str()) == Some("snapshot") => Some(UNTIMED_SNAPSHOT),
            None => None,
            Some("SNAPSHOT") => Some(UNTIMED_SNAPSHOT),
            Some(timestamp) => Some(parse_timestamp(timestamp)?),
        };

        Ok(Self {
            raw: version.to_string(),
            numeric,
            stage,
            snapshot,
        })
    }

    /// The version text exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Whether this is an in-development build of its base version
    pub fn is_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The numeric part alone: `1.0-milestone-8a-SNAPSHOT` → `1.0`
    pub fn base_version(&self) -> VersionIdentifier {
        if self.stage.is_none() && self.snapshot.is_none() {
            return self.clone();
        }
        let raw = self
            .numeric
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(".");
        Self {
            raw,
            numeric: self.numeric.clone(),
            stage: None,
            snapshot: None,
        }
    }
}

/// Parse a `yyyyMMddHHmmss` timestamp, UTC unless an `±hhmm` offset follows.
fn parse_timestamp(timestamp: &str) -> Result<i64, VersionError> {
    let invalid = || VersionError::Timestamp(timestamp.to_string());
    let field = |range: std::ops::Range<usize>| -> Result<u32, VersionError> {
        timestamp
            .get(range)
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(invalid)
    };

    let date = NaiveDate::from_ymd_opt(field(0..4)? as i32, field(4..6)?, field(6..8)?)
        .ok_or_else(invalid)?;
    let local: NaiveDateTime = date
        .and_hms_opt(field(8..10)?, field(10..12)?, field(12..14)?)
        .ok_or_else(invalid)?;

    let offset_seconds = match timestamp.get(14..15) {
        None => 0,
        Some(sign) => {
            let magnitude = (field(15..17)? * 3600 + field(17..19)? * 60) as i32;
            if sign == "-" { -magnitude } else { magnitude }
        }
    };
    let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(invalid)?;

    offset
        .from_local_datetime(&local)
        .single()
        .map(|instant| instant.timestamp_millis())
        .ok_or_else(invalid)
}

fn compare_optional<T: Ord>(left: &Option<T>, right: &Option<T>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => l.cmp(r),
        // Absence means "final", which sorts after any marker
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for VersionIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric
            .cmp(&other.numeric)
            .then_with(|| compare_optional(&self.stage, &other.stage))
            .then_with(|| compare_optional(&self.snapshot, &other.snapshot))
    }
}

impl PartialOrd for VersionIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionIdentifier {}

impl Hash for VersionIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numeric.hash(state);
        self.stage.hash(state);
        self.snapshot.hash(state);
    }
}

impl FromStr for VersionIdentifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for VersionIdentifier {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for VersionIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for VersionIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionIdentifier {
        VersionIdentifier::parse(s).unwrap()
    }

    #[test]
    fn test_parse_release() {
        let version = v("1.0");
        assert_eq!(version.as_str(), "1.0");
        assert!(version.stage().is_none());
        assert!(!version.is_snapshot());
    }

    #[test]
    fn test_parse_patched_milestone() {
        let stage = v("1.0-milestone-8a").stage().unwrap();
        assert_eq!(stage.kind, StageKind::Milestone);
        assert_eq!(stage.number, 8);
        assert_eq!(stage.patch, Some('a'));
    }

    #[test]
    fn test_parse_snapshot_markers() {
        assert!(v("1.12-SNAPSHOT").is_snapshot());
        assert!(v("0.9-snapshot-1").is_snapshot());
        assert!(v("1.0-milestone-3-20110529171239+1000").is_snapshot());
        assert!(v("1.0-20110529171239").is_snapshot());
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "1", "abc", "1.0-", "1.0-rc", "1.0-rc-x", "1.0-rc-1-tomorrow", " 1.0"] {
            assert!(
                matches!(VersionIdentifier::parse(bad), Err(VersionError::Invalid(_))),
                "accepted: {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_impossible_timestamp() {
        assert!(matches!(
            VersionIdentifier::parse("1.0-20111399000000"),
            Err(VersionError::Timestamp(_))
        ));
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(v("0.9") < v("0.10"));
        assert!(v("1.0") < v("1.0.1"));
        assert!(v("1.9") < v("1.12"));
    }

    #[test]
    fn test_stage_ordering() {
        assert!(v("1.0-milestone-9") < v("1.0-preview-1"));
        assert!(v("1.0-beta-1") < v("1.0-preview-1"));
        assert!(v("1.0-milestone-1") < v("1.0-beta-1"));
        assert!(v("1.0-preview-1") < v("1.0-rc-1"));
        assert!(v("1.0-rc-3") < v("1.0"));
        assert!(v("1.0-milestone-8") < v("1.0-milestone-8a"));
        assert!(v("1.0-milestone-8a") < v("1.0-milestone-9"));
    }

    #[test]
    fn test_snapshot_ordering() {
        assert!(v("1.0-SNAPSHOT") < v("1.0"));
        assert!(v("1.0-rc-1-20120101000000") < v("1.0-rc-1"));
        assert!(v("1.0-20120101000000") < v("1.0-20120102000000"));
        // Same instant in different zones
        assert_eq!(v("1.0-20120101010000+0100"), v("1.0-20120101000000"));
        assert!(v("1.0-20120101000000-0100") > v("1.0-20120101000000"));
    }

    #[test]
    fn test_base_version() {
        assert_eq!(v("1.0-milestone-8a-SNAPSHOT").base_version().as_str(), "1.0");
        assert_eq!(v("2.0-rc-1").base_version(), v("2.0"));
        assert_eq!(v("1.12").base_version().as_str(), "1.12");
    }

    #[test]
    fn test_snapshot_not_strictly_equal_to_base() {
        assert_ne!(v("1.12-SNAPSHOT"), v("1.12"));
    }
}
