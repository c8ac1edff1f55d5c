//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Komparator- und GPIO-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;

use crate::types::{ComparatorOutput, PinLevel};

/// Fehler-Typ für Komparator- und LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcmpError {
    /// Komparator-Ausgang konnte nicht gelesen werden
    ReadFailed,
    /// LED-Pin konnte nicht geschrieben werden
    WriteFailed,
}

impl fmt::Display for AcmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "comparator read failed"),
            Self::WriteFailed => write!(f, "LED pin write failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AcmpError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AcmpError::ReadFailed => defmt::write!(fmt, "ReadFailed"),
            AcmpError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}

/// Trait für den Zugriff auf den Komparator-Ausgang
///
/// # Implementierungen
/// - **Production:** AdcComparator (ESP32 ADC1 gegen Referenzspannung)
/// - **Testing:** MockComparator (vorgegebene Sequenz)
pub trait ComparatorInput: Send {
    /// Liest den aktuellen Zustand des CMP_OUT Bits
    ///
    /// # Fehlerbehandlung
    /// Gibt `AcmpError::ReadFailed` zurück wenn die Messung fehlschlägt
    fn read_output(&mut self) -> Result<ComparatorOutput, AcmpError>;
}

/// Trait für den LED-Ausgangspin
///
/// # Implementierungen
/// - **Production:** GpioLedPin (esp-hal Push-Pull Output)
/// - **Testing:** MockLedPin (in-memory Mock)
pub trait LedPin: Send {
    /// Setzt den Ausgangspegel des Pins
    fn set_level(&mut self, level: PinLevel) -> Result<(), AcmpError>;
}
