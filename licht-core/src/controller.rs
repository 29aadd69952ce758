//! Hauptschleifen-Logik - Testbare Business Logic ohne Hardware-Abhängigkeit
//!
//! Der Controller fragt den geteilten Tick-Zustand ab, führt die Fade-Rampe
//! während des Haltens nach und arbeitet nach dem Loslassen genau eine
//! Aktion ab. Danach wird die Wake-Quelle scharf geschaltet und geschlafen.
//!
//! # Trait-basierte Abstraktion
//! Die generischen Parameter ermöglichen:
//! - Real Hardware (LEDC, GPIO, Timer) im Production-Code
//! - Mock Implementationen in den Integration Tests

use crate::action::{Action, Dispatcher, Show};
use crate::fade::duty_for;
use crate::hold::HoldIntent;
use crate::power::PowerManager;
use crate::shared::{ButtonPoll, SharedTick};
use crate::traits::{HoldDelay, HwError, Indicator, Level, PowerControl, SteadyLight};
use crate::types::Interaction;

/// Zustand, der nur der Hauptschleife gehört
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceState {
    pub dispatcher: Dispatcher,
    pub power: PowerManager,
}

pub struct Controller<'a, I, S, D, P> {
    tick: &'a SharedTick,
    indicator: I,
    steady: S,
    delay: D,
    power: P,
    state: DeviceState,
}

impl<'a, I, S, D, P> Controller<'a, I, S, D, P>
where
    I: Indicator,
    S: SteadyLight,
    D: HoldDelay,
    P: PowerControl,
{
    pub fn new(tick: &'a SharedTick, indicator: I, steady: S, delay: D, power: P) -> Self {
        Self {
            tick,
            indicator,
            steady,
            delay,
            power,
            state: DeviceState::default(),
        }
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Ausgänge dunkel schalten und Tick starten
    ///
    /// Nach dem Einschalten bleibt das Gerät wach, bis die erste Bedienung
    /// abgeschlossen ist.
    pub fn start(&mut self) -> Result<(), HwError> {
        self.indicator.set_level(Level::Off)?;
        self.steady.set_level(Level::Off)?;
        self.state.power.resume_tick(&mut self.power);
        Ok(())
    }

    /// Ein Durchlauf der Hauptschleife
    ///
    /// Gibt `Some` zurück, wenn eine Bedienung abgeschlossen wurde. Die
    /// Funktion kehrt dann erst nach dem nächsten Aufwachen zurück.
    pub fn poll(&mut self) -> Result<Option<Interaction>, HwError> {
        match self.tick.poll() {
            ButtonPoll::Idle => Ok(None),
            ButtonPoll::Holding { level } => {
                self.indicator.set_duty(duty_for(level))?;
                Ok(None)
            }
            ButtonPoll::Released { intent } => self.complete(intent).map(Some),
        }
    }

    fn complete(&mut self, intent: HoldIntent) -> Result<Interaction, HwError> {
        // Blink-Sequenzen laufen ohne Tick
        self.state.power.suspend_tick(&mut self.power);

        let action = self.state.dispatcher.dispatch(intent);
        let shown = self.play(&action.show());

        // Auch nach einem Ausgabefehler schlafen, sonst bleibt der Tick aus
        let slept = self.state.power.sleep_until_wake(&mut self.power);
        self.tick.reset_hold();

        shown?;
        slept?;
        Ok(self.interaction(action))
    }

    /// Spielt die Blink-Sequenz ab und schaltet danach das Dauerlicht
    ///
    /// Das Dauerlicht wird auch nach einem Indikator-Fehler geschaltet,
    /// damit es zum bereits übernommenen `lighting_on` passt. Zurückgegeben
    /// wird der erste Fehler.
    fn play(&mut self, show: &Show) -> Result<(), HwError> {
        let blinked = self.blink(show);
        let steady = match show.steady {
            Some(level) => self.steady.set_level(level),
            None => Ok(()),
        };
        blinked.and(steady)
    }

    fn blink(&mut self, show: &Show) -> Result<(), HwError> {
        for step in show.pattern.steps() {
            self.indicator.set_level(step.level)?;
            self.delay.delay_ms(step.duration_ms);
        }
        self.indicator.set_level(Level::Off)
    }

    fn interaction(&self, action: Action) -> Interaction {
        Interaction {
            action,
            count: self.state.dispatcher.count(),
            lighting_on: self.state.dispatcher.lighting_on(),
        }
    }
}
