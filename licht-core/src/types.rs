//! Core Types für die Tasterlicht-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::action::{Action, StoredCount};

/// Ergebnis einer abgeschlossenen Bedienung
///
/// Wird vom Controller an die Firmware zurückgegeben, die es loggt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interaction {
    pub action: Action,
    pub count: StoredCount,
    pub lighting_on: bool,
}

impl Interaction {
    /// Kurzname der Aktion für Logs
    pub fn name(&self) -> &'static str {
        match self.action {
            Action::Report { .. } => "Anzeigen",
            Action::Increment { .. } => "Hochzählen",
            Action::Illuminate => "Dauerlicht an",
            Action::Shutdown => "Dauerlicht aus",
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Interaction {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Interaction {{ action: {}, count: {}, light: {} }}",
            self.name(),
            self.count.value(),
            self.lighting_on
        )
    }
}
