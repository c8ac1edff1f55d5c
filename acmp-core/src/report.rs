//! Debug-Reporter für die Polling-Schleife
//!
//! Zählt die Iterationen pro Komparator-Zustand und meldet genau einmal
//! pro Laufzeit, sobald ein Zähler `loop_count_max` erreicht.

use crate::types::{ComparatorOutput, DebugEvent};

/// One-Shot Debug-Meldungen
///
/// High- und Low-Iterationen werden getrennt gezählt. Das Freigabe-Flag
/// ist gemeinsam: nach der ersten Meldung bleibt der Reporter stumm.
#[derive(Debug, Clone)]
pub struct DebugReporter {
    armed: bool,
    loop_count_max: u32,
    count_high: u32,
    count_low: u32,
}

impl DebugReporter {
    /// Erstellt einen Reporter; `enabled = false` meldet nie etwas
    pub fn new(enabled: bool, loop_count_max: u32) -> Self {
        Self {
            armed: enabled,
            loop_count_max,
            count_high: 0,
            count_low: 0,
        }
    }

    /// Verarbeitet eine Iteration und liefert ggf. die fällige Meldung
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use acmp_core::{ComparatorOutput, DebugEvent, DebugReporter};
    /// let mut reporter = DebugReporter::new(true, 1);
    /// assert_eq!(reporter.observe(ComparatorOutput::High), Some(DebugEvent::LedTurnedOn));
    /// assert_eq!(reporter.observe(ComparatorOutput::Low), None);
    /// ```
    pub fn observe(&mut self, output: ComparatorOutput) -> Option<DebugEvent> {
        let (count, event) = match output {
            ComparatorOutput::High => (&mut self.count_high, DebugEvent::LedTurnedOn),
            ComparatorOutput::Low => (&mut self.count_low, DebugEvent::LedTurnedOff),
        };
        *count = count.saturating_add(1);

        if self.armed && *count == self.loop_count_max {
            self.armed = false;
            return Some(event);
        }
        None
    }

    /// Start-Meldung nach der Initialisierung, nur bei aktiviertem Reporter
    ///
    /// Nach der ersten One-Shot-Meldung gibt es auch diese nicht mehr.
    pub fn startup_message(&self) -> Option<&'static str> {
        self.armed.then_some("Initialization done")
    }

    /// true solange noch keine Meldung ausgegeben wurde
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn count_high(&self) -> u32 {
        self.count_high
    }

    pub fn count_low(&self) -> u32 {
        self.count_low
    }
}
