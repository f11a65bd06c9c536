mod pin;

pub use pin::{NewPin, Pin, PinId};
