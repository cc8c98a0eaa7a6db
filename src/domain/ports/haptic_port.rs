//! Haptic feedback port definition.

use std::fmt;

/// Kind of feedback to give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticKind {
    /// Light tick for toggles and links.
    Selection,
    /// Medium impact when a submit is accepted.
    Impact,
    /// Rejected input.
    Error,
}

impl fmt::Display for HapticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection => write!(f, "selection"),
            Self::Impact => write!(f, "impact"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Port for fire-and-forget haptic feedback.
#[cfg_attr(test, mockall::automock)]
pub trait HapticPort: Send + Sync {
    /// Gives feedback of the given kind. Never fails.
    fn notify(&self, kind: HapticKind);
}
