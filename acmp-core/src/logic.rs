//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{ComparatorOutput, PinLevel};

/// Bestimmt den LED-Pegel aus dem Komparator-Ausgang
///
/// Die User-LED ist active-low: Komparator high → Pin low (LED an),
/// Komparator low → Pin high (LED aus).
///
/// # Beispiele
///
/// ```
/// # use acmp_core::{led_level_for, ComparatorOutput, PinLevel};
/// assert_eq!(led_level_for(ComparatorOutput::High), PinLevel::Low);
/// assert_eq!(led_level_for(ComparatorOutput::Low), PinLevel::High);
/// ```
pub fn led_level_for(output: ComparatorOutput) -> PinLevel {
    match output {
        ComparatorOutput::High => PinLevel::Low,
        ComparatorOutput::Low => PinLevel::High,
    }
}

/// Nicht-invertierender Komparator: high nur wenn IN-P echt größer als IN-N
///
/// ```
/// # use acmp_core::{compare, ComparatorOutput};
/// assert_eq!(compare(1650, 1200), ComparatorOutput::High);
/// assert_eq!(compare(1650, 1650), ComparatorOutput::Low);
/// ```
pub fn compare(in_p_mv: u32, in_n_mv: u32) -> ComparatorOutput {
    ComparatorOutput::from_bit(in_p_mv > in_n_mv)
}
