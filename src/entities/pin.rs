use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinId(Uuid);

impl PinId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// `None` when `raw` is not a well-formed identifier.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: PinId,
    pub lat: f64,
    pub lng: f64,
    pub place_id: String,
}

impl Pin {
    pub fn new(new_pin: NewPin) -> Self {
        Self {
            id: PinId::new(),
            lat: new_pin.lat,
            lng: new_pin.lng,
            place_id: new_pin.place_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPin {
    pub lat: f64,
    pub lng: f64,
    pub place_id: String,
}

impl NewPin {
    /// Rejects coordinates that cannot be stored as JSON numbers.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.lat.is_finite() {
            return Err(invalid_input_error(format!("lat {} is not finite", self.lat)));
        }

        if !self.lng.is_finite() {
            return Err(invalid_input_error(format!("lng {} is not finite", self.lng)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park() -> NewPin {
        NewPin {
            lat: 1.5,
            lng: 2.5,
            place_id: "park".into(),
        }
    }

    #[test]
    fn parse_accepts_uuid() {
        let id = PinId::new();

        assert_eq!(PinId::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(PinId::parse(""), None);
        assert_eq!(PinId::parse("not-an-id"), None);
        assert_eq!(PinId::parse("5a1b2c3d4e5f6a7b8c9d0e1f"), None);
        assert_eq!(PinId::parse("../savedpins"), None);
    }

    #[test]
    fn id_serializes_as_string() {
        let pin = Pin::new(park());
        let value = serde_json::to_value(&pin).unwrap();

        assert_eq!(value["id"], serde_json::json!(pin.id.to_string()));
        assert_eq!(value["place_id"], "park");
    }

    #[test]
    fn default_ids_are_fresh() {
        assert_ne!(PinId::default(), PinId::default());
    }

    #[test]
    fn validate_accepts_any_finite_pin() {
        assert!(park().validate().is_ok());
        assert!(NewPin { lat: 95.0, lng: -200.0, ..park() }.validate().is_ok());
        assert!(NewPin { place_id: "".into(), ..park() }.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_finite() {
        let err = NewPin { lat: f64::NAN, ..park() }.validate().unwrap_err();
        assert_eq!(err.code, crate::error::INVALID_INPUT);

        assert!(NewPin { lng: f64::INFINITY, ..park() }.validate().is_err());
    }
}
