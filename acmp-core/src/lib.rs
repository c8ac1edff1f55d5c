//! ACMP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Typen, Traits und Pure Functions für die
//! Komparator → LED Steuerung.

#![no_std]

pub mod logic;
pub mod poller;
pub mod report;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{compare, led_level_for};
pub use poller::{PollEvent, Poller};
pub use report::DebugReporter;
pub use traits::{AcmpError, ComparatorInput, LedPin};
pub use types::{ComparatorOutput, DebugEvent, LedState, PinLevel};
