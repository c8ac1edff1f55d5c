// Komparator-LED Task - Pollt CMP_OUT und steuert die User-LED
use defmt::{error, info, warn};
use embassy_futures::yield_now;
use embassy_time::Instant;

use crate::config::REFERENCE_MV;
use crate::hal::{AdcComparator, GpioLedPin};
use crate::{ComparatorInput, DebugReporter, LedPin, LedState, PollEvent, Poller};

/// Komparator-LED Logic - Endlosschleife über einen Poller
///
/// Ohne Entprellung und ohne festes Timing:
/// - liest den Komparator-Ausgang
/// - Komparator high → LED an (Pin low), Komparator low → LED aus (Pin high)
/// - gibt nach jeder Iteration die CPU an den Executor ab
///
/// Die eigentliche Iteration samt Fehler-Buchhaltung steckt in
/// `acmp_core::Poller` und wird dort auf dem Host getestet.
///
/// # Parameter
/// - `comparator`: Komparator-Eingang (Hardware oder Mock)
/// - `led`: LED-Pin (Hardware oder Mock)
/// - `reporter`: One-Shot Debug-Meldungen
pub async fn comparator_led_logic<C: ComparatorInput, L: LedPin>(
    comparator: C,
    led: L,
    reporter: DebugReporter,
) -> ! {
    let mut poller = Poller::new(comparator, led, reporter);

    loop {
        // Fehler werden über log_poll_event gemeldet
        poller.step(log_poll_event).ok();

        // Kooperativ bleiben, aber ohne Delay weiter pollen
        yield_now().await;
    }
}

fn log_poll_event(event: PollEvent) {
    match event {
        PollEvent::Debug(debug) => {
            info!("{} (t = {} ms)", debug, Instant::now().as_millis());
        }
        PollEvent::Failed(e) => error!("Polling failed: {}", e),
        PollEvent::Recovered { output, level } => warn!(
            "Polling recovered: {} -> LED {}",
            output,
            LedState::from_pin_level(level)
        ),
    }
}

/// Komparator-LED Task - Embassy Task für die Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann
/// `comparator_led_logic()` auf.
///
/// # Parameter
/// - `adc1`: ADC1 Peripheral für die IN-N Messung
/// - `in_n`: GPIO2 als analoger Eingang IN-N
/// - `led_gpio`: GPIO15 für die User-LED
/// - `reporter`: Debug-Reporter mit der Firmware-Konfiguration
#[embassy_executor::task]
pub async fn comparator_led_task(
    adc1: esp_hal::peripherals::ADC1<'static>,
    in_n: esp_hal::peripherals::GPIO2<'static>,
    led_gpio: esp_hal::peripherals::GPIO15<'static>,
    reporter: DebugReporter,
) {
    let comparator = AdcComparator::new(adc1, in_n, REFERENCE_MV);
    let led = GpioLedPin::new(led_gpio);

    if reporter.is_armed() {
        info!(
            "Comparator ready: IN-P = {} mV, apply input on GPIO2 (IN-N)",
            comparator.reference_mv()
        );
    }

    comparator_led_logic(comparator, led, reporter).await
}
