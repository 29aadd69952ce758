//! Entprellung und Flankenerkennung
//!
//! Wird einmal pro Timer-Tick mit dem Rohpegel des Tasters aufgerufen.
//! Ein neuer Zustand wird erst übernommen, wenn mehr als
//! [`DEBOUNCE_THRESHOLD`] aufeinanderfolgende Samples übereinstimmen.

use crate::config::DEBOUNCE_THRESHOLD;

/// Entprellte Flanke des Tasters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// Ergebnis eines einzelnen Samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sample {
    /// Sample weicht vom vorherigen ab (Prellen), Zähler zurückgesetzt
    Bounce,
    /// Sample stimmt mit dem vorherigen überein, keine neue Flanke
    Steady,
    /// Stabiler Zustand hat gewechselt
    Edge(Edge),
}

/// Zähler-basierter Entpreller
///
/// `true` bedeutet immer "gedrückt", die Umrechnung vom elektrischen Pegel
/// (active-low) passiert beim Aufrufer.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    last_level: bool,
    stable: bool,
    count: u16,
}

impl Debouncer {
    /// Neuer Entpreller, Taster gilt als losgelassen
    pub const fn new() -> Self {
        Self {
            last_level: false,
            stable: false,
            count: 0,
        }
    }

    /// Aktuell akzeptierter (entprellter) Zustand
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Verarbeitet ein Sample des Rohpegels
    pub fn sample(&mut self, pressed: bool) -> Sample {
        if pressed != self.last_level {
            self.count = 0;
            self.last_level = pressed;
            return Sample::Bounce;
        }

        self.count = self.count.saturating_add(1);

        if self.count > DEBOUNCE_THRESHOLD && pressed != self.stable {
            self.stable = pressed;
            let edge = if pressed { Edge::Pressed } else { Edge::Released };
            return Sample::Edge(edge);
        }

        Sample::Steady
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(debouncer: &mut Debouncer, level: bool, ticks: u16) -> Option<Edge> {
        let mut edge = None;
        for _ in 0..ticks {
            if let Sample::Edge(e) = debouncer.sample(level) {
                assert!(edge.is_none(), "Flanke doppelt gemeldet");
                edge = Some(e);
            }
        }
        edge
    }

    #[test]
    fn test_press_needs_threshold_plus_one_matches() {
        let mut deb = Debouncer::new();

        // Erstes Sample ist die Abweichung vom Startzustand
        assert_eq!(deb.sample(true), Sample::Bounce);
        assert_eq!(feed(&mut deb, true, DEBOUNCE_THRESHOLD), None);
        assert!(!deb.is_pressed());

        assert_eq!(deb.sample(true), Sample::Edge(Edge::Pressed));
        assert!(deb.is_pressed());
    }

    #[test]
    fn test_edge_reported_once() {
        let mut deb = Debouncer::new();
        assert_eq!(feed(&mut deb, true, 500), Some(Edge::Pressed));
        assert_eq!(feed(&mut deb, true, 500), None);
        assert_eq!(feed(&mut deb, false, 500), Some(Edge::Released));
        assert_eq!(feed(&mut deb, false, 500), None);
    }

    #[test]
    fn test_glitch_resets_counter() {
        let mut deb = Debouncer::new();
        deb.sample(true);
        feed(&mut deb, true, DEBOUNCE_THRESHOLD - 1);

        // Ein einzelner Ausreißer setzt den Zähler zurück
        assert_eq!(deb.sample(false), Sample::Bounce);
        assert_eq!(deb.sample(true), Sample::Bounce);
        assert_eq!(feed(&mut deb, true, DEBOUNCE_THRESHOLD), None);
        assert!(!deb.is_pressed());
        assert_eq!(deb.sample(true), Sample::Edge(Edge::Pressed));
    }

    #[test]
    fn test_counter_saturates_on_long_hold() {
        let mut deb = Debouncer::new();
        feed(&mut deb, true, 100);
        for _ in 0..70_000u32 {
            assert_eq!(deb.sample(true), Sample::Steady);
        }
        assert_eq!(feed(&mut deb, false, 100), Some(Edge::Released));
    }
}
