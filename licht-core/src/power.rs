//! Power Management
//!
//! Zwei Zustände: `Active` (Tick läuft) und `Asleep` (nur die Wake-Quelle
//! ist scharf). Tick und Wake-Quelle sind nie gleichzeitig aktiv, sonst
//! würde dieselbe Flanke doppelt verarbeitet.

use crate::traits::{HwError, PowerControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Active,
    Asleep,
}

/// Buchführung über Tick und Wake-Quelle
#[derive(Debug, Clone, Copy)]
pub struct PowerManager {
    state: PowerState,
    tick_enabled: bool,
    wake_armed: bool,
    wakeups: u32,
}

impl PowerManager {
    /// Zustand nach dem Einschalten: aktiv, Tick läuft
    pub const fn new() -> Self {
        Self {
            state: PowerState::Active,
            tick_enabled: true,
            wake_armed: false,
            wakeups: 0,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn tick_enabled(&self) -> bool {
        self.tick_enabled
    }

    pub fn wake_armed(&self) -> bool {
        self.wake_armed
    }

    /// Anzahl der Aufwach-Vorgänge seit dem Einschalten
    pub fn wakeups(&self) -> u32 {
        self.wakeups
    }

    /// Tick anhalten, z.B. vor einer blockierenden Blink-Sequenz
    pub fn suspend_tick<P: PowerControl>(&mut self, hw: &mut P) {
        hw.disable_tick();
        self.tick_enabled = false;
    }

    /// Tick wieder starten
    pub fn resume_tick<P: PowerControl>(&mut self, hw: &mut P) {
        debug_assert!(!self.wake_armed, "Tick bei scharfer Wake-Quelle");
        hw.enable_tick();
        self.tick_enabled = true;
    }

    /// Wake-Quelle scharf schalten, schlafen, nach dem Aufwachen Tick starten
    ///
    /// Schlägt das Scharfschalten fehl, wird nicht geschlafen (sonst gäbe es
    /// keinen Weg zurück); der Tick läuft dann direkt weiter.
    pub fn sleep_until_wake<P: PowerControl>(&mut self, hw: &mut P) -> Result<(), HwError> {
        if self.tick_enabled {
            self.suspend_tick(hw);
        }

        if let Err(e) = hw.arm_wake() {
            self.resume_tick(hw);
            return Err(e);
        }
        self.wake_armed = true;

        self.state = PowerState::Asleep;
        hw.enter_sleep();

        // Aufgewacht: Wake-Quelle entschärft sich sofort selbst
        hw.disarm_wake();
        self.wake_armed = false;
        self.state = PowerState::Active;
        self.wakeups = self.wakeups.wrapping_add(1);

        self.resume_tick(hw);
        Ok(())
    }
}

impl Default for PowerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePower {
        tick: bool,
        armed: bool,
        fail_arm: bool,
        sleeps: u32,
        armed_during_tick: bool,
    }

    impl FakePower {
        fn check(&mut self) {
            if self.tick && self.armed {
                self.armed_during_tick = true;
            }
        }
    }

    impl PowerControl for FakePower {
        fn enable_tick(&mut self) {
            self.tick = true;
            self.check();
        }
        fn disable_tick(&mut self) {
            self.tick = false;
        }
        fn arm_wake(&mut self) -> Result<(), HwError> {
            if self.fail_arm {
                return Err(HwError::WakeConfigFailed);
            }
            self.armed = true;
            self.check();
            Ok(())
        }
        fn disarm_wake(&mut self) {
            self.armed = false;
        }
        fn enter_sleep(&mut self) {
            assert!(self.armed, "Schlafen ohne Wake-Quelle");
            self.sleeps += 1;
        }
    }

    #[test]
    fn test_sleep_cycle() {
        let mut hw = FakePower {
            tick: true,
            ..Default::default()
        };
        let mut pm = PowerManager::new();

        pm.sleep_until_wake(&mut hw).unwrap();

        assert_eq!(hw.sleeps, 1);
        assert!(hw.tick);
        assert!(!hw.armed);
        assert!(!hw.armed_during_tick);
        assert_eq!(pm.state(), PowerState::Active);
        assert!(pm.tick_enabled());
        assert!(!pm.wake_armed());
        assert_eq!(pm.wakeups(), 1);
    }

    #[test]
    fn test_arm_failure_keeps_device_awake() {
        let mut hw = FakePower {
            tick: true,
            fail_arm: true,
            ..Default::default()
        };
        let mut pm = PowerManager::new();

        assert_eq!(pm.sleep_until_wake(&mut hw), Err(HwError::WakeConfigFailed));
        assert_eq!(hw.sleeps, 0);
        assert!(hw.tick);
        assert!(pm.tick_enabled());
        assert_eq!(pm.wakeups(), 0);
    }
}
