//! Helligkeits-Rampe während der Taster gehalten wird

use crate::config::MAX_BRIGHTNESS;

/// Duty-Cycle für eine Position in der Fade-Rampe
///
/// Volle Helligkeit bei Level 0, dunkel bei Level 255.
///
/// ```
/// # use licht_core::fade::duty_for;
/// assert_eq!(duty_for(0), 255);
/// assert_eq!(duty_for(255), 0);
/// ```
pub fn duty_for(level: u8) -> u8 {
    MAX_BRIGHTNESS - level
}
