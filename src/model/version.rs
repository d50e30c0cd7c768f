/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:\.\d+)+").expect("version pattern must compile")
});

/// Behaviour when the portal rejects the announced protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionPolicy {
    /// Look for a suggested version in the error payload and retry once with it
    #[default]
    Renegotiate,
    /// Report the rejection as is
    Strict,
}

impl VersionPolicy {
    /// Returns `true` if a rejected request may be retried with a suggested version
    #[must_use]
    pub fn renegotiates(self) -> bool {
        self == VersionPolicy::Renegotiate
    }
}

impl fmt::Display for VersionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPolicy::Renegotiate => write!(f, "renegotiate"),
            VersionPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for VersionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "renegotiate" => Ok(VersionPolicy::Renegotiate),
            "strict" => Ok(VersionPolicy::Strict),
            other => Err(format!("unknown version policy: {other}")),
        }
    }
}

/// Extracts the protocol version suggested by the portal from an error payload
///
/// The payload is scanned for dotted `major.minor.patch` numbers and the first
/// one that differs from `rejected` is returned. Longer dotted runs, such as
/// IP addresses, are skipped as a whole. A payload that only repeats the
/// rejected version yields `None`, so a retry is never attempted with the
/// version that just failed.
#[must_use]
pub fn extract_suggested_version(payload: &str, rejected: &str) -> Option<String> {
    VERSION_PATTERN
        .find_iter(payload)
        .map(|m| m.as_str())
        .filter(|candidate| candidate.split('.').count() == 3)
        .find(|candidate| *candidate != rejected)
        .map(String::from)
}
