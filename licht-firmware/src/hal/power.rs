// Power Management: Tick-Interrupt, GPIO Wake-Quelle und Light Sleep
//
// Light Sleep statt Deep Sleep: der RAM bleibt erhalten, damit überlebt
// der Zählerstand den Schlaf (aber keinen Stromausfall).

use defmt::{debug, warn};
use esp_hal::gpio::WakeEvent;
use esp_hal::rtc_cntl::Rtc;
use esp_hal::rtc_cntl::sleep::GpioWakeupSource;
use licht_core::{HwError, PowerControl};

use crate::tick::{BUTTON, TIMER};

/// Taster ist active low, also weckt der LOW-Pegel
const WAKE_EVENT: WakeEvent = WakeEvent::LowLevel;

pub struct EspPower {
    rtc: Rtc<'static>,
}

impl EspPower {
    pub fn new(rtc: Rtc<'static>) -> Self {
        Self { rtc }
    }
}

impl PowerControl for EspPower {
    fn enable_tick(&mut self) {
        critical_section::with(|cs| {
            if let Some(timer) = TIMER.borrow_ref_mut(cs).as_mut() {
                // Während des Schlafs aufgelaufenen Interrupt verwerfen
                timer.clear_interrupt();
                timer.listen();
            }
        });
    }

    fn disable_tick(&mut self) {
        critical_section::with(|cs| {
            if let Some(timer) = TIMER.borrow_ref_mut(cs).as_mut() {
                timer.unlisten();
            }
        });
    }

    fn arm_wake(&mut self) -> Result<(), HwError> {
        critical_section::with(|cs| match BUTTON.borrow_ref_mut(cs).as_mut() {
            Some(button) => button
                .wakeup_enable(true, WAKE_EVENT)
                .map_err(|_| HwError::WakeConfigFailed),
            None => Err(HwError::WakeConfigFailed),
        })
    }

    fn disarm_wake(&mut self) {
        let result = critical_section::with(|cs| match BUTTON.borrow_ref_mut(cs).as_mut() {
            Some(button) => button.wakeup_enable(false, WAKE_EVENT).is_ok(),
            None => false,
        });
        if !result {
            warn!("Wake-Quelle konnte nicht deaktiviert werden");
        }
    }

    fn enter_sleep(&mut self) {
        debug!("Light Sleep");
        let wake_source = GpioWakeupSource::new();
        self.rtc.sleep_light(&[&wake_source]);
        debug!("Aufgewacht");
    }
}
