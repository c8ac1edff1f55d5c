// Task-Modul: Enthält alle Embassy Tasks

pub mod comparator_led;

// Re-export Tasks für einfachen Import
pub use comparator_led::comparator_led_task;
