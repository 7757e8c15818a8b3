//! Dotted version numbers as used by registry `feature` nodes (`"1.0"`, `"4.6"`).
//!
//! Ordering is numeric per segment, so `"10.0" > "9.1"`. A missing segment counts as zero
//! (`"4" == "4.0"`). Segments that are not decimal numbers fall back to string comparison
//! so that malformed input still sorts deterministically.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[glzig_derive::glzig_error]
pub enum VersionError {
    #[error("Invalid version{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Compares two dotted version strings segment by segment.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let ord = compare_segment(l.unwrap_or("0"), r.unwrap_or("0"));
                if ord != Ordering::Equal {
                    return ord;
                }
            },
        }
    }
}

fn compare_segment(l: &str, r: &str) -> Ordering {
    match (l.parse::<u64>(), r.parse::<u64>()) {
        (Ok(l), Ok(r)) => l.cmp(&r),
        _ => l.cmp(r),
    }
}

/// `major.minor` pair shown in the emitted `about` block and used to pick the probe strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl FromStr for ApiVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let major = parse_part(parts.next(), s)?;
        let minor = match parts.next() {
            Some(part) => parse_part(Some(part), s)?,
            None => 0,
        };
        Ok(Self { major, minor })
    }
}

fn parse_part(part: Option<&str>, whole: &str) -> Result<u32, VersionError> {
    part.filter(|p| !p.is_empty())
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| VersionError::Invalid {
            message: format!("'{whole}' is not a dotted decimal version").into(),
            context: None,
        })
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
