//! Integration Tests für die Komparator-LED-Logik
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockComparator / MockLedPin

use std::sync::{Arc, Mutex};

use acmp_core::{
    AcmpError, ComparatorInput, ComparatorOutput, DebugEvent, DebugReporter, LedPin, LedState,
    PinLevel, PollEvent, Poller, compare, led_level_for,
};

// ============================================================================
// Mocks
// ============================================================================

/// Liefert eine vorgegebene Sequenz von Messergebnissen (zyklisch)
pub struct MockComparator {
    readings: Vec<Result<ComparatorOutput, AcmpError>>,
    pub read_count: usize,
}

impl MockComparator {
    pub fn new(readings: Vec<Result<ComparatorOutput, AcmpError>>) -> Self {
        Self {
            readings,
            read_count: 0,
        }
    }

    /// Simuliert Spannungen an IN-N gegen eine feste Referenz an IN-P
    pub fn from_voltages(reference_mv: u32, in_n_mv: &[u32]) -> Self {
        Self::new(
            in_n_mv
                .iter()
                .map(|&mv| Ok(compare(reference_mv, mv)))
                .collect(),
        )
    }
}

impl ComparatorInput for MockComparator {
    fn read_output(&mut self) -> Result<ComparatorOutput, AcmpError> {
        let reading = self.readings[self.read_count % self.readings.len()];
        self.read_count += 1;
        reading
    }
}

/// Gemeinsames Protokoll für Pin-Schreibzugriffe und Poll-Meldungen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trace {
    Write(PinLevel),
    Event(PollEvent),
}

pub type TraceLog = Arc<Mutex<Vec<Trace>>>;

#[derive(Default)]
pub struct MockLedPin {
    pub levels: Vec<PinLevel>,
    pub fail_next_write: bool,
    pub trace: Option<TraceLog>,
}

impl MockLedPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace(trace: TraceLog) -> Self {
        Self {
            trace: Some(trace),
            ..Self::default()
        }
    }

    pub fn led_state(&self) -> Option<LedState> {
        self.levels.last().copied().map(LedState::from_pin_level)
    }
}

impl LedPin for MockLedPin {
    fn set_level(&mut self, level: PinLevel) -> Result<(), AcmpError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(AcmpError::WriteFailed);
        }
        if let Some(trace) = &self.trace {
            trace.lock().unwrap().push(Trace::Write(level));
        }
        self.levels.push(level);
        Ok(())
    }
}

fn quiet_poller(comparator: MockComparator) -> Poller<MockComparator, MockLedPin> {
    Poller::new(comparator, MockLedPin::new(), DebugReporter::new(false, 1))
}

/// Führt `n` Iterationen aus und sammelt alle Meldungen
fn run(poller: &mut Poller<MockComparator, MockLedPin>, n: usize) -> Vec<PollEvent> {
    let mut events = Vec::new();
    for _ in 0..n {
        poller.step(|event| events.push(event)).ok();
    }
    events
}

// ============================================================================
// Tests: LED-Pegel
// ============================================================================

#[test]
fn test_comparator_high_turns_led_on() {
    let mut poller = quiet_poller(MockComparator::new(vec![Ok(ComparatorOutput::High)]));

    poller.step(|_| {}).unwrap();

    assert_eq!(poller.led().levels, vec![PinLevel::Low]);
    assert_eq!(poller.led().led_state(), Some(LedState::On));
}

#[test]
fn test_comparator_low_turns_led_off() {
    let mut poller = quiet_poller(MockComparator::new(vec![Ok(ComparatorOutput::Low)]));

    poller.step(|_| {}).unwrap();

    assert_eq!(poller.led().levels, vec![PinLevel::High]);
    assert_eq!(poller.led().led_state(), Some(LedState::Off));
}

#[test]
fn test_led_follows_every_sample() {
    // Referenz 1650 mV, Poti wird über die Schwelle und zurück gedreht
    let mut poller = quiet_poller(MockComparator::from_voltages(
        1650,
        &[0, 1000, 1650, 2500, 1200],
    ));

    assert!(run(&mut poller, 5).is_empty());

    assert_eq!(
        poller.led().levels,
        vec![
            PinLevel::Low,
            PinLevel::Low,
            PinLevel::High,
            PinLevel::High,
            PinLevel::Low,
        ]
    );
}

#[test]
fn test_no_debouncing_each_toggle_is_written() {
    let mut poller = quiet_poller(MockComparator::new(vec![
        Ok(ComparatorOutput::High),
        Ok(ComparatorOutput::Low),
    ]));

    run(&mut poller, 6);

    let levels = &poller.led().levels;
    assert_eq!(levels.len(), 6);
    for (i, level) in levels.iter().enumerate() {
        let expected = if i % 2 == 0 { PinLevel::Low } else { PinLevel::High };
        assert_eq!(*level, expected);
    }
}

// ============================================================================
// Tests: Fehlerbehandlung
// ============================================================================

#[test]
fn test_read_failure_keeps_previous_level() {
    let mut poller = quiet_poller(MockComparator::new(vec![
        Ok(ComparatorOutput::High),
        Err(AcmpError::ReadFailed),
        Ok(ComparatorOutput::Low),
    ]));

    assert!(poller.step(|_| {}).is_ok());
    assert_eq!(poller.step(|_| {}), Err(AcmpError::ReadFailed));
    assert_eq!(poller.led().led_state(), Some(LedState::On));

    assert!(poller.step(|_| {}).is_ok());
    assert_eq!(poller.led().levels, vec![PinLevel::Low, PinLevel::High]);
    assert_eq!(poller.comparator().read_count, 3);
}

#[test]
fn test_error_series_is_reported_once_then_recovered() {
    let mut poller = quiet_poller(MockComparator::new(vec![
        Ok(ComparatorOutput::High),
        Err(AcmpError::ReadFailed),
        Err(AcmpError::ReadFailed),
        Err(AcmpError::ReadFailed),
        Ok(ComparatorOutput::Low),
        Ok(ComparatorOutput::Low),
    ]));

    let events = run(&mut poller, 6);

    assert_eq!(
        events,
        vec![
            PollEvent::Failed(AcmpError::ReadFailed),
            PollEvent::Recovered {
                output: ComparatorOutput::Low,
                level: PinLevel::High,
            },
        ]
    );
}

#[test]
fn test_new_error_kind_is_reported_again() {
    // Lesefehler, dann Schreibfehler, dann wieder Lesefehler
    let mut events = Vec::new();
    let mut failing = Poller::new(
        MockComparator::new(vec![
            Err(AcmpError::ReadFailed),
            Ok(ComparatorOutput::High),
        ]),
        MockLedPin {
            fail_next_write: true,
            ..MockLedPin::new()
        },
        DebugReporter::new(false, 1),
    );
    for _ in 0..3 {
        failing.step(|event| events.push(event)).ok();
    }

    assert_eq!(
        events,
        vec![
            PollEvent::Failed(AcmpError::ReadFailed),
            PollEvent::Failed(AcmpError::WriteFailed),
            PollEvent::Failed(AcmpError::ReadFailed),
        ]
    );
}

#[test]
fn test_loop_recovers_after_write_failure() {
    let mut led = MockLedPin::new();
    led.fail_next_write = true;
    let mut poller = Poller::new(
        MockComparator::new(vec![Ok(ComparatorOutput::High)]),
        led,
        DebugReporter::new(false, 1),
    );

    assert_eq!(poller.step(|_| {}), Err(AcmpError::WriteFailed));
    assert!(poller.led().levels.is_empty());

    assert_eq!(
        poller.step(|_| {}),
        Ok((ComparatorOutput::High, PinLevel::Low))
    );
}

#[test]
fn test_error_display() {
    assert_eq!(AcmpError::ReadFailed.to_string(), "comparator read failed");
    assert_eq!(AcmpError::WriteFailed.to_string(), "LED pin write failed");
}

// ============================================================================
// Tests: Debug-Reporter in der Schleife
// ============================================================================

#[test]
fn test_reporter_emits_single_message_over_run() {
    let mut poller = Poller::new(
        MockComparator::new(vec![
            Ok(ComparatorOutput::High),
            Ok(ComparatorOutput::Low),
        ]),
        MockLedPin::new(),
        DebugReporter::new(true, 1),
    );

    let events = run(&mut poller, 20);

    assert_eq!(events, vec![PollEvent::Debug(DebugEvent::LedTurnedOn)]);
    assert_eq!(poller.reporter().count_high(), 10);
    assert_eq!(poller.reporter().count_low(), 10);
}

#[test]
fn test_debug_message_precedes_pin_write() {
    let trace: TraceLog = Arc::default();
    let mut poller = Poller::new(
        MockComparator::new(vec![Ok(ComparatorOutput::Low)]),
        MockLedPin::with_trace(trace.clone()),
        DebugReporter::new(true, 1),
    );

    let events_log = trace.clone();
    poller
        .step(|event| events_log.lock().unwrap().push(Trace::Event(event)))
        .unwrap();

    assert_eq!(
        *trace.lock().unwrap(),
        vec![
            Trace::Event(PollEvent::Debug(DebugEvent::LedTurnedOff)),
            Trace::Write(PinLevel::High),
        ]
    );
}

#[test]
fn test_reporter_skips_failed_reads() {
    let mut poller = Poller::new(
        MockComparator::new(vec![
            Err(AcmpError::ReadFailed),
            Ok(ComparatorOutput::High),
        ]),
        MockLedPin::new(),
        DebugReporter::new(true, 1),
    );

    let events = run(&mut poller, 2);

    assert_eq!(poller.reporter().count_high(), 1);
    assert_eq!(poller.reporter().count_low(), 0);
    assert_eq!(
        events,
        vec![
            PollEvent::Failed(AcmpError::ReadFailed),
            PollEvent::Debug(DebugEvent::LedTurnedOn),
            PollEvent::Recovered {
                output: ComparatorOutput::High,
                level: PinLevel::Low,
            },
        ]
    );
}

#[test]
fn test_reporter_matches_led_level() {
    let mut reporter = DebugReporter::new(true, 1);
    let output = ComparatorOutput::Low;

    let event = reporter.observe(output).unwrap();

    assert_eq!(event, DebugEvent::LedTurnedOff);
    assert_eq!(
        LedState::from_pin_level(led_level_for(output)),
        LedState::Off
    );
}
