//! Licht Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die komplette Bedienlogik (Entprellung, Halte-Dauer,
//! Aktionen, Power Management) und die Traits für den Hardware-Zugriff.

#![no_std]

pub mod action;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod fade;
pub mod hold;
pub mod pattern;
pub mod power;
pub mod shared;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use action::{Action, Dispatcher, Show, StoredCount};
pub use controller::{Controller, DeviceState};
pub use debounce::{Debouncer, Edge, Sample};
pub use hold::{HoldClassifier, HoldIntent};
pub use pattern::{Pattern, Step};
pub use power::{PowerManager, PowerState};
pub use shared::{ButtonPoll, SharedTick, TickSnapshot, TickState};
pub use traits::{HoldDelay, HwError, Indicator, Level, PowerControl, SteadyLight};
pub use types::Interaction;
