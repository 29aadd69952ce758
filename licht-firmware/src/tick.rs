// Tick-Interrupt: Entprellung und Halte-Klassifizierung
//
// Der Timer-Interrupt liest den Taster und ruft `SharedTick::on_tick` auf.
// Taster und Timer liegen in Critical-Section Mutexen, weil auch das
// Power Management (Hauptschleife) darauf zugreift.

use core::cell::RefCell;

use critical_section::Mutex;
use esp_hal::Blocking;
use esp_hal::gpio::Input;
use esp_hal::handler;
use esp_hal::time::Duration;
use esp_hal::timer::PeriodicTimer;
use licht_core::SharedTick;

use crate::config::TICK_PERIOD_US;

/// Geteilter Zustand zwischen Tick-Interrupt und Hauptschleife
pub static TICK: SharedTick = SharedTick::new();

/// Taster (active low), wird auch als Wake-Quelle konfiguriert
pub(crate) static BUTTON: Mutex<RefCell<Option<Input<'static>>>> =
    Mutex::new(RefCell::new(None));

/// Periodischer Timer für den Tick
pub(crate) static TIMER: Mutex<RefCell<Option<PeriodicTimer<'static, Blocking>>>> =
    Mutex::new(RefCell::new(None));

/// Übergibt Taster und Timer an den Interrupt und startet den Tick
///
/// # Fehlerbehandlung
/// Gibt den Timer-Fehler zurück wenn die Periode nicht gesetzt werden kann
pub fn start(
    button: Input<'static>,
    mut timer: PeriodicTimer<'static, Blocking>,
) -> Result<(), esp_hal::timer::Error> {
    timer.set_interrupt_handler(tick_handler);
    timer.start(Duration::from_micros(TICK_PERIOD_US))?;

    critical_section::with(|cs| {
        BUTTON.borrow_ref_mut(cs).replace(button);
        timer.listen();
        TIMER.borrow_ref_mut(cs).replace(timer);
    });
    Ok(())
}

#[handler]
fn tick_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = TIMER.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }

        let pressed = BUTTON
            .borrow_ref(cs)
            .as_ref()
            .is_some_and(|button| button.is_low());

        TICK.on_tick(pressed);
    });
}
