// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Pin-Zuordnung (fest im Task verdrahtet):
// - GPIO2:  Komparator-Eingang IN-N (ADC1), hier wird Poti / Testspannung angeschlossen
// - GPIO15: User-LED, active-low (Kathode am Pin, Anode über Vorwiderstand an 3V3)

// ============================================================================
// Komparator Konfiguration
// ============================================================================

/// Versorgungsspannung VDDP in Millivolt
pub const VDDP_MV: u32 = 3300;

/// Obergrenze für die Referenzspannung in Millivolt
/// Messbereich von ADC1 bei 11 dB Dämpfung
pub const MAX_REFERENCE_MV: u32 = 3300;

/// Referenzspannung an IN-P in Millivolt
/// Default ist die halbe Versorgungsspannung (Referenzteiler VDDP / 2).
/// Kann zur Build-Zeit über ACMP_REFERENCE_MV überschrieben werden
/// (siehe .env.example)
pub const REFERENCE_MV: u32 = parse_millivolts(option_env!("ACMP_REFERENCE_MV"), VDDP_MV / 2);

// ============================================================================
// Debug Konfiguration
// ============================================================================

/// Debug-Ausgaben aktivieren ("Initialization done" und One-Shot-Meldung)
/// Wird über das Cargo-Feature `debug-print` gesteuert
pub const DEBUG_PRINT_ENABLED: bool = cfg!(feature = "debug-print");

/// Anzahl Schleifendurchläufe bis zur Debug-Meldung
pub const DEBUG_LOOP_COUNT_MAX: u32 = 1;

// ============================================================================
// Helfer
// ============================================================================

/// Parst einen Millivolt-Wert zur Compile-Zeit
///
/// Ungültige Werte brechen den Build ab statt still den Default zu nutzen.
const fn parse_millivolts(value: Option<&str>, default: u32) -> u32 {
    match value {
        Some(text) => match u32::from_str_radix(text, 10) {
            Ok(mv) if mv <= MAX_REFERENCE_MV => mv,
            Ok(_) => panic!("ACMP_REFERENCE_MV liegt außerhalb des ADC-Messbereichs"),
            Err(_) => panic!("ACMP_REFERENCE_MV ist keine gültige Zahl"),
        },
        None => default,
    }
}
