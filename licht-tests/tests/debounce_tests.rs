//! Integration Tests für Entprellung und Flanken-Flags
//!
//! Zufällige Sample-Folgen mit festem Seed, damit Fehler reproduzierbar sind.

use licht_core::config::DEBOUNCE_THRESHOLD;
use licht_core::{ButtonPoll, Debouncer, Edge, Sample, TickState};

// ============================================================================
// Pseudo-Zufall (xorshift32)
// ============================================================================

struct XorShift(u32);

impl XorShift {
    fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: u32) -> u32 {
        self.next() % bound
    }
}

const SEEDS: [u32; 5] = [0x1234_5678, 0xdead_beef, 42, 7, 0x0bad_f00d];

// ============================================================================
// Tests: Debouncer
// ============================================================================

#[test]
fn test_short_glitches_never_flip_state() {
    for seed in SEEDS {
        let mut rng = XorShift(seed);
        let mut deb = Debouncer::new();

        for _ in 0..2_000 {
            // Rauschen: Bursts kürzer als die Schwelle, abwechselnde Pegel
            let burst = 1 + rng.below(DEBOUNCE_THRESHOLD as u32);
            let level = rng.below(2) == 1;
            for _ in 0..burst {
                assert_ne!(
                    deb.sample(level),
                    Sample::Edge(Edge::Pressed),
                    "seed {seed:#x}: glitch accepted"
                );
            }
            // Gegenpegel beendet den Burst
            deb.sample(!level);
            assert!(!deb.is_pressed(), "seed {seed:#x}");
        }
    }
}

#[test]
fn test_state_changes_only_after_threshold_run() {
    for seed in SEEDS {
        let mut rng = XorShift(seed);
        let mut deb = Debouncer::new();
        let mut run_level = false;
        let mut run_len: u32 = 0;

        for _ in 0..200_000 {
            // Lange Läufe sind selten, damit beide Fälle vorkommen
            let level = if rng.below(200) == 0 {
                !run_level
            } else if rng.below(40) == 0 {
                rng.below(2) == 1
            } else {
                run_level
            };

            if level == run_level {
                run_len += 1;
            } else {
                run_level = level;
                run_len = 1;
            }

            let before = deb.is_pressed();
            if let Sample::Edge(edge) = deb.sample(level) {
                assert_ne!(before, deb.is_pressed());
                assert_eq!(edge == Edge::Pressed, level);
                assert!(
                    run_len >= DEBOUNCE_THRESHOLD as u32 + 2,
                    "seed {seed:#x}: edge after run of {run_len}"
                );
            } else {
                assert_eq!(before, deb.is_pressed());
            }
        }
    }
}

// ============================================================================
// Tests: Flanken-Flags
// ============================================================================

#[test]
fn test_flags_alternate_and_are_consumed_once() {
    for seed in SEEDS {
        let mut rng = XorShift(seed);
        let mut state = TickState::new();
        let mut presses = 0u32;
        let mut releases = 0u32;
        let mut was_pressed = false;

        for _ in 0..200 {
            let pressed = rng.below(2) == 1;
            let ticks = rng.below(400);
            for _ in 0..ticks {
                state.tick(pressed);

                let snap = state.snapshot();
                if snap.pressed && !was_pressed {
                    presses += 1;
                }
                if snap.released {
                    // Loslassen ist nur nach einem Drücken möglich
                    assert!(snap.pressed, "seed {seed:#x}");
                }

                if let ButtonPoll::Released { .. } = state.poll() {
                    releases += 1;
                    let after = state.snapshot();
                    assert!(!after.pressed && !after.released, "seed {seed:#x}");
                }
                was_pressed = state.snapshot().pressed;
            }
        }

        // Jedes Loslassen gehört zu genau einem Drücken
        assert!(releases <= presses, "seed {seed:#x}");
        assert!(presses - releases <= 1, "seed {seed:#x}");
    }
}
