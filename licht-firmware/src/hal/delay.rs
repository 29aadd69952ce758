// Blockierendes Warten für Blink-Sequenzen

use esp_hal::delay::Delay;
use licht_core::HoldDelay;

pub struct BlockingDelay {
    delay: Delay,
}

impl BlockingDelay {
    pub fn new() -> Self {
        Self {
            delay: Delay::new(),
        }
    }
}

impl Default for BlockingDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl HoldDelay for BlockingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_millis(ms);
    }
}
