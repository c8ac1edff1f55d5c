// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Core-Traits auf der ESP32-C6 Hardware.

pub mod comparator;
pub mod led_pin;

pub use comparator::AdcComparator;
pub use led_pin::GpioLedPin;
