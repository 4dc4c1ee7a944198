//! Textual wrapper defects
//!
//! Some old wrappers choked on the raw text of the version they were asked
//! to launch, independent of its ordering. Each defect is one predicate over
//! that raw text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Re-spun milestone build such as `1.0-milestone-8a-20120101000000+0100`
    static ref PATCHED_MILESTONE: Regex = Regex::new(r"^1\.0-milestone-\d+[a-z]-.+$").unwrap();
}

/// Whole-string match of the timezone pattern `.*+\d{4}` the 0.9.1 wrapper
/// tested versions against.
///
/// `.*+` is possessive: it consumes every character up to a line terminator
/// and never gives any back, so `\d{4}` has nothing left to match. No version
/// string satisfies the pattern, `+hhmm` offsets included. The `regex` crate
/// has no possessive quantifiers, so the match is evaluated directly.
pub fn matches_timezone_pattern(raw_version: &str) -> bool {
    let rest = raw_version.trim_start_matches(|c: char| !is_line_terminator(c));
    rest.len() == 4 && rest.bytes().all(|b| b.is_ascii_digit())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Patched milestone builds carry a letter after the milestone number
/// followed by a further suffix.
pub fn is_patched_milestone_build(raw_version: &str) -> bool {
    PATCHED_MILESTONE.is_match(raw_version)
}
