// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von acmp-core
pub use acmp_core::{
    AcmpError, ComparatorInput, ComparatorOutput, DebugEvent, DebugReporter, LedPin, LedState,
    PinLevel, PollEvent, Poller, compare, led_level_for,
};

use crate::config::{DEBUG_LOOP_COUNT_MAX, DEBUG_PRINT_ENABLED};

/// Erstellt den Debug-Reporter mit der Firmware-Konfiguration
pub fn debug_reporter() -> DebugReporter {
    DebugReporter::new(DEBUG_PRINT_ENABLED, DEBUG_LOOP_COUNT_MAX)
}

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate baut nur für riscv32imac-unknown-none-elf (esp-hal, esp-rtos).
// Die komplette Logik liegt daher in acmp-core und wird dort bzw. in
// acmp-tests auf dem Host getestet. Hier bleibt nur die Hardware-Anbindung:
// AdcComparator und GpioLedPin implementieren die Core-Traits, der Task
// treibt einen Poller und loggt dessen Meldungen.
