//! Haptic feedback for a terminal: the bell is the only actuator available.

use std::io::{self, Write};

use crossterm::style::Print;
use tracing::{trace, warn};

use crate::domain::ports::{HapticKind, HapticPort};

const BELL: char = '\x07';

/// Rings the terminal bell for errors, and optionally for accepted submits.
#[derive(Debug, Clone, Copy)]
pub struct TerminalHaptics {
    enabled: bool,
    impact_bell: bool,
}

impl TerminalHaptics {
    #[must_use]
    pub const fn new(enabled: bool, impact_bell: bool) -> Self {
        Self {
            enabled,
            impact_bell,
        }
    }

    /// Returns whether `kind` produces an audible bell.
    #[must_use]
    pub const fn rings_for(&self, kind: HapticKind) -> bool {
        if !self.enabled {
            return false;
        }
        match kind {
            HapticKind::Error => true,
            HapticKind::Impact => self.impact_bell,
            HapticKind::Selection => false,
        }
    }
}

/// Writes the bell through crossterm and flushes `out`.
fn ring(out: &mut impl Write) -> io::Result<()> {
    crossterm::execute!(out, Print(BELL))
}

impl HapticPort for TerminalHaptics {
    fn notify(&self, kind: HapticKind) {
        trace!(%kind, "Haptic feedback");
        if !self.rings_for(kind) {
            return;
        }

        if let Err(e) = ring(&mut io::stdout()) {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_rings_by_default() {
        let haptics = TerminalHaptics::new(true, false);
        assert!(haptics.rings_for(HapticKind::Error));
        assert!(!haptics.rings_for(HapticKind::Impact));
        assert!(!haptics.rings_for(HapticKind::Selection));
    }

    #[test]
    fn test_impact_bell_opt_in() {
        let haptics = TerminalHaptics::new(true, true);
        assert!(haptics.rings_for(HapticKind::Impact));
    }

    #[test]
    fn test_ring_writes_bell() {
        let mut out = Vec::new();
        ring(&mut out).unwrap();
        assert_eq!(out, b"\x07");
    }

    #[test]
    fn test_disabled_never_rings() {
        let haptics = TerminalHaptics::new(false, true);
        assert!(!haptics.rings_for(HapticKind::Error));
        assert!(!haptics.rings_for(HapticKind::Impact));
    }
}
