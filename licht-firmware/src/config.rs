// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Die Bedienlogik (Fade-Rate, Zähler, Blink-Timings) ist in
// `licht_core::config` festgelegt, hier steht nur die Board-Seite.
// Die Pins sind typisierte Peripherals und werden direkt in `main` vergeben.

// ============================================================================
// Tick
// ============================================================================

/// Periode des Tick-Interrupts in Mikrosekunden
///
/// Mit der Entprell-Schwelle von 60 Ticks ergibt das ca. 30 ms.
pub const TICK_PERIOD_US: u64 = 500;

// ============================================================================
// PWM (LEDC)
// ============================================================================

/// PWM-Frequenz der Anzeige-LED in kHz
/// 24 kHz ist unhörbar und flimmerfrei, 8 Bit Auflösung reichen bei APB-Takt
pub const LEDC_FREQUENCY_KHZ: u32 = 24;
