pub mod saved_pins;
