// Dauerlicht ("weiße" LED) an einem einfachen GPIO-Ausgang

use esp_hal::gpio::Output;
use licht_core::{HwError, Level, SteadyLight};

pub struct GpioSteadyLight {
    pin: Output<'static>,
}

impl GpioSteadyLight {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl SteadyLight for GpioSteadyLight {
    fn set_level(&mut self, level: Level) -> Result<(), HwError> {
        match level {
            Level::On => self.pin.set_high(),
            Level::Off => self.pin.set_low(),
        }
        Ok(())
    }
}
