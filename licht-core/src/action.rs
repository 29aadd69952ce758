//! Aktions-Auswahl nach dem Loslassen
//!
//! Beim Loslassen entscheidet die Halte-Dauer über genau eine Aktion:
//!
//! | Halte-Dauer | Aktion       | Zähler          |
//! |-------------|--------------|-----------------|
//! | kurz        | Anzeigen     | unverändert     |
//! | mittel      | Hochzählen   | +1, bei 5 auf 0 |
//! | lang        | Dauerlicht   | unverändert     |
//!
//! Brennt das Dauerlicht bereits, wird unabhängig von der Halte-Dauer
//! abgeschaltet.

use crate::config::COUNTER_CEILING;
use crate::hold::HoldIntent;
use crate::pattern::Pattern;
use crate::traits::Level;

/// Zählerstand, läuft von 0 bis `COUNTER_CEILING - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StoredCount(u8);

impl StoredCount {
    /// Höchster Zählerstand vor dem Überlauf
    pub const MAX: u8 = COUNTER_CEILING - 1;

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_full(self) -> bool {
        self.0 == Self::MAX
    }

    /// Verbleibende Schritte bis zum vollen Zähler
    pub fn remaining(self) -> u8 {
        Self::MAX - self.0
    }

    pub fn incremented(self) -> Self {
        Self((self.0 + 1) % COUNTER_CEILING)
    }
}

/// Ausgewählte Aktion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Action {
    /// Zählerstand anzeigen
    Report { count: StoredCount },
    /// Zähler erhöhen
    Increment { count: StoredCount },
    /// Dauerlicht einschalten
    Illuminate,
    /// Dauerlicht ausschalten
    Shutdown,
}

impl Action {
    /// Wählt die Aktion; `Shutdown` hat Vorrang vor der Halte-Dauer
    pub fn select(lighting_on: bool, intent: HoldIntent, count: StoredCount) -> Self {
        match (lighting_on, intent) {
            (true, _) => Action::Shutdown,
            (false, HoldIntent::Short) => Action::Report { count },
            (false, HoldIntent::Medium) => Action::Increment {
                count: count.incremented(),
            },
            (false, HoldIntent::Long) => Action::Illuminate,
        }
    }

    /// Sichtbare Rückmeldung dieser Aktion
    pub fn show(&self) -> Show {
        match self {
            Action::Report { count } if count.is_full() => Show {
                pattern: Pattern::long_flash(),
                steady: None,
            },
            Action::Report { count } => Show {
                pattern: Pattern::short_flashes(count.remaining()),
                steady: None,
            },
            Action::Increment { .. } => Show {
                pattern: Pattern::confirm_increment(),
                steady: None,
            },
            Action::Illuminate => Show {
                pattern: Pattern::empty(),
                steady: Some(Level::On),
            },
            Action::Shutdown => Show {
                pattern: Pattern::shutdown(),
                steady: Some(Level::Off),
            },
        }
    }
}

/// Blink-Muster plus optionaler Wechsel des Dauerlichts danach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub pattern: Pattern,
    pub steady: Option<Level>,
}

/// Einziger Schreiber von Zählerstand und Dauerlicht-Zustand
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    count: StoredCount,
    lighting_on: bool,
}

impl Dispatcher {
    pub const fn new() -> Self {
        Self {
            count: StoredCount(0),
            lighting_on: false,
        }
    }

    pub fn count(&self) -> StoredCount {
        self.count
    }

    pub fn lighting_on(&self) -> bool {
        self.lighting_on
    }

    /// Wählt die Aktion und übernimmt ihre Zustandsänderung
    pub fn dispatch(&mut self, intent: HoldIntent) -> Action {
        let action = Action::select(self.lighting_on, intent, self.count);
        match action {
            Action::Report { .. } => {}
            Action::Increment { count } => self.count = count,
            Action::Illuminate => self.lighting_on = true,
            Action::Shutdown => self.lighting_on = false,
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LONG_FLASH_MS, SHORT_FLASH_MS};

    #[test]
    fn test_counter_wraps_after_ceiling() {
        let mut count = StoredCount::default();
        for expected in 1..COUNTER_CEILING {
            count = count.incremented();
            assert_eq!(count.value(), expected);
        }
        assert!(count.is_full());
        assert_eq!(count.incremented().value(), 0);
    }

    #[test]
    fn test_short_hold_reports_without_mutation() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.dispatch(HoldIntent::Medium);
        dispatcher.dispatch(HoldIntent::Medium);

        let action = dispatcher.dispatch(HoldIntent::Short);
        assert_eq!(
            action,
            Action::Report {
                count: StoredCount(2)
            }
        );
        assert_eq!(action.show().pattern.pulses(SHORT_FLASH_MS), 2);
        assert_eq!(dispatcher.count().value(), 2);
    }

    #[test]
    fn test_full_counter_reports_long_flash() {
        let show = Action::Report {
            count: StoredCount(StoredCount::MAX),
        }
        .show();
        assert_eq!(show.pattern.pulses(LONG_FLASH_MS), 1);
        assert_eq!(show.pattern.pulses(SHORT_FLASH_MS), 0);
        assert_eq!(show.steady, None);
    }

    #[test]
    fn test_long_hold_illuminates() {
        let mut dispatcher = Dispatcher::new();
        let action = dispatcher.dispatch(HoldIntent::Long);
        assert_eq!(action, Action::Illuminate);
        assert!(dispatcher.lighting_on());
        let show = action.show();
        assert!(show.pattern.is_empty());
        assert_eq!(show.steady, Some(Level::On));
    }

    #[test]
    fn test_shutdown_overrides_every_intent() {
        for intent in [HoldIntent::Short, HoldIntent::Medium, HoldIntent::Long] {
            let mut dispatcher = Dispatcher::new();
            dispatcher.dispatch(HoldIntent::Medium);
            dispatcher.dispatch(HoldIntent::Long);

            assert_eq!(dispatcher.dispatch(intent), Action::Shutdown);
            assert!(!dispatcher.lighting_on());
            assert_eq!(dispatcher.count().value(), 1);
        }
    }
}
