//! Batch policy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a batch job does when a single file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run on the first failing file (default).
    #[default]
    Abort,
    /// Record the failure and move on to the next file.
    Continue,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Continue => write!(f, "continue"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "continue" => Ok(FailurePolicy::Continue),
            _ => Err(format!("Unknown failure policy: {}", s)),
        }
    }
}

/// Which file timestamp the renamer dates files by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampSource {
    /// File creation (birth) time. Not every filesystem records it.
    #[default]
    Created,
    /// Last modification time.
    Modified,
}

impl fmt::Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampSource::Created => write!(f, "created"),
            TimestampSource::Modified => write!(f, "modified"),
        }
    }
}

impl FromStr for TimestampSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" | "birth" => Ok(TimestampSource::Created),
            "modified" | "mtime" => Ok(TimestampSource::Modified),
            _ => Err(format!("Unknown timestamp source: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_policy_round_trips_through_display() {
        for policy in [FailurePolicy::Abort, FailurePolicy::Continue] {
            assert_eq!(policy.to_string().parse::<FailurePolicy>().unwrap(), policy);
        }
        assert!("retry".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn test_timestamp_source_aliases() {
        assert_eq!(
            "Birth".parse::<TimestampSource>().unwrap(),
            TimestampSource::Created
        );
        assert_eq!(
            "mtime".parse::<TimestampSource>().unwrap(),
            TimestampSource::Modified
        );
        assert!("accessed".parse::<TimestampSource>().is_err());
    }
}
