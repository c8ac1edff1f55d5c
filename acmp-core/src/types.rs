//! Core Types für die Komparator-LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Zustand des Komparator-Ausgangs (CMP_OUT Bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorOutput {
    /// CMP_OUT = 0 (IN-P <= IN-N)
    Low,
    /// CMP_OUT = 1 (IN-P > IN-N)
    High,
}

impl ComparatorOutput {
    /// Erstellt den Ausgangszustand aus einem gelesenen Status-Bit
    pub fn from_bit(bit: bool) -> Self {
        if bit { Self::High } else { Self::Low }
    }
}

/// Pegel eines GPIO-Ausgangs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// Logischer Zustand der User-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    /// Übersetzt den Pin-Pegel in den LED-Zustand
    ///
    /// Die LED ist active-low verdrahtet: Low am Pin schaltet sie ein.
    pub fn from_pin_level(level: PinLevel) -> Self {
        match level {
            PinLevel::Low => Self::On,
            PinLevel::High => Self::Off,
        }
    }
}

/// Einmalige Debug-Meldung der Polling-Schleife
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugEvent {
    /// LED wurde eingeschaltet, weil der Komparator-Ausgang high ist
    LedTurnedOn,
    /// LED wurde ausgeschaltet, weil der Komparator-Ausgang low ist
    LedTurnedOff,
}

impl DebugEvent {
    pub fn message(self) -> &'static str {
        match self {
            Self::LedTurnedOn => "Turns LED ON because comparator output is high",
            Self::LedTurnedOff => "Turns LED OFF because comparator output is low",
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ComparatorOutput {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ComparatorOutput::Low => defmt::write!(fmt, "CMP_OUT=0"),
            ComparatorOutput::High => defmt::write!(fmt, "CMP_OUT=1"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinLevel::Low => defmt::write!(fmt, "Low"),
            PinLevel::High => defmt::write!(fmt, "High"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedState::On => defmt::write!(fmt, "An"),
            LedState::Off => defmt::write!(fmt, "Aus"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DebugEvent {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.message())
    }
}
