//! Halte-Dauer Klassifizierung
//!
//! Solange der Taster gehalten wird, zählt der Klassifizierer Ticks zu
//! Fade-Schritten (`level`) und vollständige Fade-Zyklen (`cycles`).

use crate::config::{FADE_DELAY, HOLD_CYCLES_CEILING};

/// Wie lange der Taster gehalten wurde, gemessen in Fade-Zyklen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HoldIntent {
    /// Kein voller Zyklus
    Short,
    /// Genau ein voller Zyklus
    Medium,
    /// Zwei oder mehr volle Zyklen
    Long,
}

impl HoldIntent {
    pub fn from_cycles(cycles: u8) -> Self {
        match cycles {
            0 => HoldIntent::Short,
            1 => HoldIntent::Medium,
            _ => HoldIntent::Long,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HoldClassifier {
    fade_tick: u8,
    level: u8,
    cycles: u8,
}

impl HoldClassifier {
    pub const fn new() -> Self {
        Self {
            fade_tick: 0,
            level: 0,
            cycles: 0,
        }
    }

    /// Ein Tick bei gehaltenem Taster
    pub fn advance(&mut self) {
        self.fade_tick += 1;
        if self.fade_tick < FADE_DELAY {
            return;
        }
        self.fade_tick = 0;

        // Nach 255 beginnt die Rampe wieder bei 0
        self.level = self.level.wrapping_add(1);
        if self.level == u8::MAX && self.cycles < HOLD_CYCLES_CEILING {
            self.cycles += 1;
        }
    }

    /// Taster nicht gehalten: alles auf 0
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Position in der Fade-Rampe (0..=255)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Anzahl vollständiger Fade-Zyklen (gedeckelt)
    pub fn cycles(&self) -> u8 {
        self.cycles
    }

    pub fn intent(&self) -> HoldIntent {
        HoldIntent::from_cycles(self.cycles)
    }
}
