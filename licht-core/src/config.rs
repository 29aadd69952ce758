//! Compile-Zeit Konstanten für die Bedienlogik
//!
//! Die Zeiten beziehen sich auf einen Tick von 500 µs. Ein Fade-Zyklus
//! dauert dann `255 * FADE_DELAY` Ticks, also ca. 2 s. Daraus ergeben sich
//! die Fenster der Halte-Dauer (plus ca. 30 ms Entprellung):
//!
//! | Halte-Dauer | Aktion |
//! |---|---|
//! | unter ca. 2 s | Report |
//! | ca. 2 s bis 4 s | Increment |
//! | ab ca. 4 s | Illuminate |

// ============================================================================
// Taster / Entprellung
// ============================================================================

/// Anzahl aufeinanderfolgender gleicher Samples, die überschritten werden
/// muss, bevor ein neuer Tasterzustand übernommen wird
///
/// Bei einem Tick von 500 µs entspricht das ca. 30 ms.
pub const DEBOUNCE_THRESHOLD: u16 = 60;

// ============================================================================
// Fade / Halte-Dauer
// ============================================================================

/// Ticks pro `HoldLevel`-Schritt (Fade-Geschwindigkeit)
///
/// 16 Ticks sind 8 ms pro Schritt.
pub const FADE_DELAY: u8 = 16;

/// Maximale Helligkeit der dimmbaren LED (8-Bit Duty)
pub const MAX_BRIGHTNESS: u8 = u8::MAX;

/// Obergrenze für gezählte Fade-Zyklen
///
/// Alles ab 2 Zyklen bedeutet "langes Halten".
pub const HOLD_CYCLES_CEILING: u8 = 2;

// ============================================================================
// Zähler
// ============================================================================

/// Anzahl der Zählerstände, danach springt der Zähler auf 0 zurück
pub const COUNTER_CEILING: u8 = 5;

// ============================================================================
// Blink-Timings (Millisekunden)
// ============================================================================

/// Dunkelphase vor der Zähler-Anzeige
pub const REPORT_LEAD_IN_MS: u32 = 500;

/// Kurzes Blinken bei der Zähler-Anzeige (an und aus jeweils)
pub const SHORT_FLASH_MS: u32 = 500;

/// Langes Blinken wenn der Zähler voll ist
pub const LONG_FLASH_MS: u32 = 1500;

/// Kurze Pulse der Bestätigung beim Hochzählen
pub const CONFIRM_PULSE_MS: u32 = 200;

/// Abschließender langer Puls der Bestätigung
pub const CONFIRM_LONG_MS: u32 = 500;

/// Pause vor dem Abschalten des Dauerlichts
pub const SHUTDOWN_DELAY_MS: u32 = 250;
