// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus licht-core für die ESP32-C6 Peripherals.

pub mod delay;
pub mod indicator;
pub mod power;
pub mod steady;

pub use delay::BlockingDelay;
pub use indicator::{LedcIndicator, LedcSetupError};
pub use power::EspPower;
pub use steady::GpioSteadyLight;
