//! Blink-Muster als Daten
//!
//! Ein Muster ist eine Folge von (Pegel, Dauer) Schritten für die
//! Anzeige-LED. Abgespielt wird es vom Controller über [`HoldDelay`];
//! danach ist die LED immer dunkel.
//!
//! [`HoldDelay`]: crate::traits::HoldDelay

use heapless::Vec;

use crate::config::{
    CONFIRM_LONG_MS, CONFIRM_PULSE_MS, LONG_FLASH_MS, REPORT_LEAD_IN_MS, SHORT_FLASH_MS,
    SHUTDOWN_DELAY_MS,
};
use crate::traits::Level;

/// Maximale Anzahl Schritte eines Musters
pub const MAX_STEPS: usize = 12;

/// Ein Schritt: Pegel halten für `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub level: Level,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    steps: Vec<Step, MAX_STEPS>,
}

impl Pattern {
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    fn then(mut self, level: Level, duration_ms: u32) -> Self {
        let overflow = self.steps.push(Step { level, duration_ms }).is_err();
        debug_assert!(!overflow, "Pattern hat mehr als MAX_STEPS Schritte");
        self
    }

    /// Zähler-Anzeige: `count` kurze Blinks nach einer Dunkelphase
    pub fn short_flashes(count: u8) -> Self {
        let mut pattern = Self::empty().then(Level::Off, REPORT_LEAD_IN_MS);
        for _ in 0..count {
            pattern = pattern
                .then(Level::On, SHORT_FLASH_MS)
                .then(Level::Off, SHORT_FLASH_MS);
        }
        pattern
    }

    /// Zähler voll: ein langer Blink nach einer Dunkelphase
    pub fn long_flash() -> Self {
        Self::empty()
            .then(Level::Off, REPORT_LEAD_IN_MS)
            .then(Level::On, LONG_FLASH_MS)
    }

    /// Bestätigung beim Hochzählen: zwei kurz, einmal lang
    pub fn confirm_increment() -> Self {
        Self::empty()
            .then(Level::Off, CONFIRM_PULSE_MS)
            .then(Level::On, CONFIRM_PULSE_MS)
            .then(Level::Off, CONFIRM_PULSE_MS)
            .then(Level::On, CONFIRM_PULSE_MS)
            .then(Level::Off, CONFIRM_PULSE_MS)
            .then(Level::On, CONFIRM_LONG_MS)
    }

    /// Dunkelphase bevor das Dauerlicht abgeschaltet wird
    pub fn shutdown() -> Self {
        Self::empty().then(Level::Off, SHUTDOWN_DELAY_MS)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Anzahl der Leucht-Pulse mit genau dieser Dauer
    pub fn pulses(&self, duration_ms: u32) -> usize {
        self.steps
            .iter()
            .filter(|s| s.level == Level::On && s.duration_ms == duration_ms)
            .count()
    }

    /// Gesamtdauer in Millisekunden
    pub fn duration_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_ms).sum()
    }
}
