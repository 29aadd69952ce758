// Dimmbare Anzeige-LED über das LEDC Peripheral
//
// Der LEDC-Timer läuft mit 8 Bit Auflösung, damit entspricht der Duty-Wert
// aus licht-core direkt dem Hardware-Duty.

use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use licht_core::{HwError, Indicator};
use static_cell::StaticCell;

/// LEDC-Timer muss 'static sein, der Channel hält eine Referenz darauf
static LEDC_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

/// Fehler bei der LEDC-Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum LedcSetupError {
    Timer,
    Channel,
}

/// Real Hardware Indicator
///
/// Nutzt LEDC Kanal 0 im Low-Speed Modus.
pub struct LedcIndicator {
    channel: channel::Channel<'static, LowSpeed>,
}

impl LedcIndicator {
    /// Erstellt einen neuen LedcIndicator
    ///
    /// # Parameter
    /// - `ledc_peripheral`: LEDC Peripheral
    /// - `pin`: GPIO für die Anzeige-LED
    /// - `frequency_khz`: PWM-Frequenz in kHz
    pub fn new(
        ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
        pin: impl PeripheralOutput<'static>,
        frequency_khz: u32,
    ) -> Result<Self, LedcSetupError> {
        let mut ledc = Ledc::new(ledc_peripheral);
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        let lstimer = LEDC_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
        lstimer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty8Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_khz(frequency_khz),
            })
            .map_err(|_| LedcSetupError::Timer)?;

        let mut channel = ledc.channel(channel::Number::Channel0, pin);
        channel
            .configure(channel::config::Config {
                timer: lstimer,
                duty_pct: 0,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(|_| LedcSetupError::Channel)?;

        Ok(Self { channel })
    }
}

impl Indicator for LedcIndicator {
    fn set_duty(&mut self, duty: u8) -> Result<(), HwError> {
        self.channel.set_duty_hw(u32::from(duty));
        Ok(())
    }
}
