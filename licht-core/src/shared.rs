//! Zustand zwischen Tick-Interrupt und Hauptschleife
//!
//! Der Tick-Interrupt darf nur Entpreller, Halte-Klassifizierer und die
//! beiden Flanken-Flags verändern. Alles andere gehört der Hauptschleife.
//! Zugriffe laufen über eine Critical Section, damit die Hauptschleife nie
//! einen halb geschriebenen Zustand sieht.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::debounce::{Debouncer, Edge, Sample};
use crate::hold::{HoldClassifier, HoldIntent};

/// Vom Tick-Interrupt beschriebener Zustand
#[derive(Debug, Clone, Copy, Default)]
pub struct TickState {
    debouncer: Debouncer,
    hold: HoldClassifier,
    pressed: bool,
    released: bool,
}

/// Was die Hauptschleife beim Abfragen vorfindet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonPoll {
    /// Taster nicht gedrückt
    Idle,
    /// Taster gehalten, aktuelle Position in der Fade-Rampe
    Holding { level: u8 },
    /// Taster losgelassen, Flags sind verbraucht
    Released { intent: HoldIntent },
}

/// Momentaufnahme für Tests und Diagnose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickSnapshot {
    pub stable_pressed: bool,
    pub pressed: bool,
    pub released: bool,
    pub level: u8,
    pub cycles: u8,
}

impl TickState {
    pub const fn new() -> Self {
        Self {
            debouncer: Debouncer::new(),
            hold: HoldClassifier::new(),
            pressed: false,
            released: false,
        }
    }

    /// Ein Timer-Tick mit dem Tasterzustand (`true` = gedrückt)
    pub fn tick(&mut self, button_pressed: bool) {
        match self.debouncer.sample(button_pressed) {
            // Prellen: in diesem Tick nichts weiter tun
            Sample::Bounce => return,
            Sample::Edge(Edge::Pressed) => self.pressed = true,
            Sample::Edge(Edge::Released) => self.released = true,
            Sample::Steady => {}
        }

        if self.pressed {
            self.hold.advance();
        } else {
            self.hold.reset();
        }
    }

    /// Abfrage durch die Hauptschleife, verbraucht ein Loslassen
    pub fn poll(&mut self) -> ButtonPoll {
        if self.released {
            self.pressed = false;
            self.released = false;
            return ButtonPoll::Released {
                intent: self.hold.intent(),
            };
        }

        if self.pressed {
            ButtonPoll::Holding {
                level: self.hold.level(),
            }
        } else {
            ButtonPoll::Idle
        }
    }

    pub fn reset_hold(&mut self) {
        self.hold.reset();
    }

    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            stable_pressed: self.debouncer.is_pressed(),
            pressed: self.pressed,
            released: self.released,
            level: self.hold.level(),
            cycles: self.hold.cycles(),
        }
    }
}

/// [`TickState`] hinter einer Critical Section, geeignet als `static`
pub struct SharedTick {
    state: Mutex<RefCell<TickState>>,
}

impl SharedTick {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(TickState::new())),
        }
    }

    /// Aufruf aus dem Tick-Interrupt
    pub fn on_tick(&self, button_pressed: bool) {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).tick(button_pressed));
    }

    pub fn poll(&self) -> ButtonPoll {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).poll())
    }

    pub fn reset_hold(&self) {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).reset_hold());
    }

    pub fn snapshot(&self) -> TickSnapshot {
        critical_section::with(|cs| self.state.borrow_ref(cs).snapshot())
    }
}

impl Default for SharedTick {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEBOUNCE_THRESHOLD, FADE_DELAY};

    /// Ticks bis eine Flanke sicher erkannt ist
    const SETTLE: u32 = DEBOUNCE_THRESHOLD as u32 + 2;

    fn ticks(state: &mut TickState, pressed: bool, n: u32) {
        for _ in 0..n {
            state.tick(pressed);
        }
    }

    #[test]
    fn test_idle_without_press() {
        let mut state = TickState::new();
        ticks(&mut state, false, 1000);
        assert_eq!(state.poll(), ButtonPoll::Idle);
        assert_eq!(state.snapshot().level, 0);
    }

    #[test]
    fn test_press_starts_fade() {
        let mut state = TickState::new();
        ticks(&mut state, true, SETTLE);
        assert!(state.snapshot().pressed);
        ticks(&mut state, true, 2 * FADE_DELAY as u32);
        match state.poll() {
            ButtonPoll::Holding { level } => assert!(level > 0),
            other => panic!("Expected Holding, got {:?}", other),
        }
    }

    #[test]
    fn test_release_consumed_once() {
        let mut state = TickState::new();
        ticks(&mut state, true, SETTLE);
        ticks(&mut state, false, SETTLE);

        let snap = state.snapshot();
        assert!(snap.pressed && snap.released);

        assert_eq!(
            state.poll(),
            ButtonPoll::Released {
                intent: HoldIntent::Short
            }
        );
        let snap = state.snapshot();
        assert!(!snap.pressed && !snap.released);
        assert_eq!(state.poll(), ButtonPoll::Idle);
    }

    #[test]
    fn test_bounce_tick_skips_classification() {
        let mut state = TickState::new();
        ticks(&mut state, true, SETTLE);
        let before = state.snapshot();

        // Zwei Ausreißer: beide Ticks sind Prellen
        state.tick(false);
        state.tick(true);
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_shared_tick_roundtrip() {
        let shared = SharedTick::new();
        for _ in 0..SETTLE {
            shared.on_tick(true);
        }
        assert!(shared.snapshot().stable_pressed);
        for _ in 0..SETTLE {
            shared.on_tick(false);
        }
        assert!(matches!(shared.poll(), ButtonPoll::Released { .. }));
        shared.reset_hold();
        assert_eq!(shared.snapshot().cycles, 0);
    }
}
