// Library-Root: Board-Anbindung der Tasterlicht-Steuerung
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod control;
pub mod hal;
pub mod tick;

// Re-exports von licht-core
pub use licht_core::{Controller, HwError, Interaction, SharedTick};

/// Controller mit der echten Hardware
pub type BoardController = Controller<
    'static,
    hal::LedcIndicator,
    hal::GpioSteadyLight,
    hal::BlockingDelay,
    hal::EspPower,
>;
