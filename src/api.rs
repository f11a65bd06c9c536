use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{NewPin, Pin, PinId};
use crate::error::Error;

#[async_trait]
pub trait SavedPinAPI {
    async fn list_pins(&self) -> Result<Vec<Pin>, Error>;
    async fn find_pin(&self, id: PinId) -> Result<Pin, Error>;
    async fn create_pin(&self, new_pin: NewPin) -> Result<Pin, Error>;
    async fn delete_pins(&self) -> Result<(), Error>;
    async fn delete_pin(&self, id: PinId) -> Result<Pin, Error>;
}

pub trait API: SavedPinAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
