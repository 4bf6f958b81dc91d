//! Lifecycle status shared across state slices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifying the lifecycle status of a slice.
///
/// `Idle` means no activity, `Running` means a transition is in flight and
/// `Ready` means the slice has settled.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Running,
    Ready,
}

impl Default for Status {
    fn default() -> Self {
        Status::Idle
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => write!(f, "idle"),
            Status::Running => write!(f, "running"),
            Status::Ready => write!(f, "ready"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(Status::default(), Status::Idle);
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::Idle.to_string(), "idle");
        assert_eq!(Status::Running.to_string(), "running");
        assert_eq!(Status::Ready.to_string(), "ready");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Running).unwrap(), "\"running\"");
        let status: Status = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(status, Status::Ready);
    }
}
