//! Polling-Schleife ohne Hardware-Abhängigkeit
//!
//! Ein `Poller` führt eine Iteration aus (lesen, melden, schreiben) und
//! merkt sich den letzten Fehler, damit eine Busy-Loop das Log nicht flutet.

use crate::logic::led_level_for;
use crate::report::DebugReporter;
use crate::traits::{AcmpError, ComparatorInput, LedPin};
use crate::types::{ComparatorOutput, DebugEvent, PinLevel};

/// Meldungen einer Iteration, in der Reihenfolge ihres Auftretens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollEvent {
    /// One-Shot Debug-Meldung, vor dem Schreiben des LED-Pins
    Debug(DebugEvent),
    /// Erster Fehler einer Fehlerserie
    Failed(AcmpError),
    /// Erste erfolgreiche Iteration nach einer Fehlerserie
    Recovered {
        output: ComparatorOutput,
        level: PinLevel,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for PollEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PollEvent::Debug(event) => defmt::write!(fmt, "{}", event),
            PollEvent::Failed(e) => defmt::write!(fmt, "Polling failed: {}", e),
            PollEvent::Recovered { output, level } => {
                defmt::write!(fmt, "Polling recovered: {} -> Pin {}", output, level)
            }
        }
    }
}

/// Komparator → LED Poller
pub struct Poller<C, L> {
    comparator: C,
    led: L,
    reporter: DebugReporter,
    last_error: Option<AcmpError>,
}

impl<C: ComparatorInput, L: LedPin> Poller<C, L> {
    pub fn new(comparator: C, led: L, reporter: DebugReporter) -> Self {
        Self {
            comparator,
            led,
            reporter,
            last_error: None,
        }
    }

    /// Eine Iteration der Polling-Schleife
    ///
    /// Liest den Komparator, übergibt eine fällige Debug-Meldung an
    /// `on_event` und schreibt danach den passenden Pegel auf den LED-Pin.
    /// Schlägt das Lesen fehl, wird nichts geschrieben und die LED behält
    /// ihren bisherigen Pegel. Fehler werden nur beim ersten Auftreten
    /// einer Serie gemeldet.
    pub fn step<F: FnMut(PollEvent)>(
        &mut self,
        mut on_event: F,
    ) -> Result<(ComparatorOutput, PinLevel), AcmpError> {
        let result = self.poll(&mut on_event);

        match result {
            Ok((output, level)) => {
                if self.last_error.take().is_some() {
                    on_event(PollEvent::Recovered { output, level });
                }
            }
            Err(e) => {
                if self.last_error != Some(e) {
                    on_event(PollEvent::Failed(e));
                }
                self.last_error = Some(e);
            }
        }
        result
    }

    fn poll<F: FnMut(PollEvent)>(
        &mut self,
        on_event: &mut F,
    ) -> Result<(ComparatorOutput, PinLevel), AcmpError> {
        let output = self.comparator.read_output()?;
        if let Some(event) = self.reporter.observe(output) {
            on_event(PollEvent::Debug(event));
        }

        let level = led_level_for(output);
        self.led.set_level(level)?;
        Ok((output, level))
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn reporter(&self) -> &DebugReporter {
        &self.reporter
    }
}
