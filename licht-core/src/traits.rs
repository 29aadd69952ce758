//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** LEDC/GPIO/Timer Wrapper in `esp-tasterlicht`
//! - **Testing:** Mocks in `licht-tests` (zeichnen alle Aufrufe auf)

/// Fehler-Typ für Hardware-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HwError {
    /// Ausgang konnte nicht geschrieben werden
    WriteFailed,
    /// Wake-Quelle konnte nicht (de)aktiviert werden
    WakeConfigFailed,
}

/// Logischer Pegel eines Ausgangs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Level {
    On,
    Off,
}

/// Dimmbare Anzeige-LED (PWM-Kanal)
pub trait Indicator {
    /// Setzt den 8-Bit Duty-Cycle (0 = dunkel, 255 = volle Helligkeit)
    ///
    /// # Fehlerbehandlung
    /// Gibt `HwError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_duty(&mut self, duty: u8) -> Result<(), HwError>;

    /// Schaltet die LED ganz an oder ganz aus
    fn set_level(&mut self, level: Level) -> Result<(), HwError> {
        match level {
            Level::On => self.set_duty(crate::config::MAX_BRIGHTNESS),
            Level::Off => self.set_duty(0),
        }
    }
}

/// Dauerlicht ("weiße" LED), nur an/aus
pub trait SteadyLight {
    fn set_level(&mut self, level: Level) -> Result<(), HwError>;
}

/// Blockierendes Warten ("Ausgang für Dauer D halten")
pub trait HoldDelay {
    fn delay_ms(&mut self, ms: u32);
}

/// Tick-Interrupt, Wake-Quelle und Schlafmodus
///
/// Der Tick-Interrupt treibt Entprellung und Halte-Klassifizierung.
/// Die Wake-Quelle ist der einzige Weg aus dem Schlaf.
pub trait PowerControl {
    /// Periodischen Tick-Interrupt aktivieren
    fn enable_tick(&mut self);

    /// Periodischen Tick-Interrupt deaktivieren
    fn disable_tick(&mut self);

    /// Wake-Quelle (Taster-Flanke) scharf schalten
    ///
    /// # Fehlerbehandlung
    /// Gibt `HwError::WakeConfigFailed` zurück wenn die Wake-Quelle nicht
    /// konfiguriert werden konnte. Dann darf NICHT geschlafen werden.
    fn arm_wake(&mut self) -> Result<(), HwError>;

    /// Wake-Quelle entschärfen (Aufgabe des Wake-Interrupts)
    fn disarm_wake(&mut self);

    /// Schlafmodus betreten, kehrt erst nach dem Wake-Interrupt zurück
    fn enter_sleep(&mut self);
}
