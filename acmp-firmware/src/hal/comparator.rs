// Komparator-Eingang über ADC1
//
// Der ESP32-C6 hat keinen analogen Komparator. IN-N wird deshalb per
// One-Shot Messung abgetastet und in Software mit der Referenz an IN-P
// verglichen. Das Ergebnis entspricht dem CMP_OUT Bit.

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcCalCurve, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO2};

use crate::{AcmpError, ComparatorInput, ComparatorOutput, compare};

/// Kalibrierungsschema für ADC1 (Kurvenkorrektur aus den eFuse-Daten)
type Calibration<'a> = AdcCalCurve<ADC1<'a>>;

/// Real Hardware Komparator
///
/// Misst IN-N an GPIO2 (ADC1, 11 dB Dämpfung, kalibriert) gegen eine
/// feste Referenzspannung an IN-P.
pub struct AdcComparator<'a> {
    adc: Adc<'a, ADC1<'a>, Blocking>,
    in_n: AdcPin<GPIO2<'a>, ADC1<'a>, Calibration<'a>>,
    reference_mv: u32,
}

impl<'a> AdcComparator<'a> {
    /// Erstellt einen neuen AdcComparator
    ///
    /// # Parameter
    /// - `adc1`: ADC1 Peripheral
    /// - `gpio2`: GPIO2 als analoger Eingang IN-N
    /// - `reference_mv`: Spannung an IN-P in Millivolt
    pub fn new(adc1: ADC1<'a>, gpio2: GPIO2<'a>, reference_mv: u32) -> Self {
        let mut adc_config = AdcConfig::new();
        let in_n =
            adc_config.enable_pin_with_cal::<_, Calibration<'a>>(gpio2, Attenuation::_11dB);
        let adc = Adc::new(adc1, adc_config);

        Self {
            adc,
            in_n,
            reference_mv,
        }
    }

    /// Misst die Spannung an IN-N in Millivolt
    ///
    /// Mit Kalibrierungsschema liefert `read_oneshot` direkt Millivolt.
    pub fn read_in_n_millivolts(&mut self) -> Result<u32, AcmpError> {
        let mv = nb::block!(self.adc.read_oneshot(&mut self.in_n))
            .map_err(|_| AcmpError::ReadFailed)?;
        Ok(u32::from(mv))
    }

    pub fn reference_mv(&self) -> u32 {
        self.reference_mv
    }
}

impl<'a> ComparatorInput for AdcComparator<'a> {
    fn read_output(&mut self) -> Result<ComparatorOutput, AcmpError> {
        let in_n_mv = self.read_in_n_millivolts()?;
        Ok(compare(self.reference_mv, in_n_mv))
    }
}
