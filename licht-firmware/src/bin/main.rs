// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::main;
use esp_hal::rtc_cntl::Rtc;
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_tasterlicht::config::{LEDC_FREQUENCY_KHZ, TICK_PERIOD_US};
use esp_tasterlicht::hal::{BlockingDelay, EspPower, GpioSteadyLight, LedcIndicator};
use esp_tasterlicht::tick::{self, TICK};
use esp_tasterlicht::{Controller, control};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet den Tick-Interrupt und übergibt an die
/// Bedienschleife. Kehrt nie zurück.
#[main]
fn main() -> ! {
    // Niedriger CPU-Takt reicht für die Bedienung und spart Strom
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::_80MHz);
    let peripherals = esp_hal::init(config);

    info!("=== Tasterlicht ===");
    info!(
        "Indicator GPIO4, steady light GPIO5, button GPIO9, tick {} us",
        TICK_PERIOD_US
    );

    // Verdrahtung (bei Änderungen auch die Log-Zeile oben anpassen):
    //   GPIO4  Anzeige-LED, LEDC Kanal 0
    //   GPIO5  Dauerlicht (weiße LED, active high)
    //   GPIO9  Taster (BOOT-Taster, Pull-Up, active low), auch Wake-Quelle

    // Taster mit Pull-Up (active low)
    let button = Input::new(
        peripherals.GPIO9,
        InputConfig::default().with_pull(Pull::Up),
    );

    // Ausgänge
    let indicator = LedcIndicator::new(peripherals.LEDC, peripherals.GPIO4, LEDC_FREQUENCY_KHZ)
        .expect("Failed to configure LEDC");
    let steady = GpioSteadyLight::new(Output::new(
        peripherals.GPIO5,
        Level::Low,
        OutputConfig::default(),
    ));

    // Power Management (Light Sleep über RTC)
    let power = EspPower::new(Rtc::new(peripherals.LPWR));

    // Tick-Interrupt starten
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    tick::start(button, PeriodicTimer::new(timg0.timer0)).expect("Failed to start tick timer");

    let controller = Controller::new(&TICK, indicator, steady, BlockingDelay::new(), power);
    control::run(controller)
}
