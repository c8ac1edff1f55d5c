// User-LED über einen esp-hal Push-Pull Ausgang

use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::{AcmpError, LedPin, PinLevel};

/// Real Hardware LED Pin
///
/// Startet mit High-Pegel, die active-low LED ist also zunächst aus.
pub struct GpioLedPin<'a> {
    pin: Output<'a>,
}

impl<'a> GpioLedPin<'a> {
    /// Erstellt einen neuen GpioLedPin
    ///
    /// # Parameter
    /// - `gpio`: GPIO Peripheral für die LED (z.B. GPIO15)
    pub fn new(gpio: impl esp_hal::gpio::OutputPin + 'a) -> Self {
        let pin = Output::new(gpio, Level::High, OutputConfig::default());
        Self { pin }
    }
}

impl<'a> LedPin for GpioLedPin<'a> {
    fn set_level(&mut self, level: PinLevel) -> Result<(), AcmpError> {
        match level {
            PinLevel::Low => self.pin.set_low(),
            PinLevel::High => self.pin.set_high(),
        }
        Ok(())
    }
}
