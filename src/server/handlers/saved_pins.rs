use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{NewPin, Pin, PinId};
use crate::error::{invalid_input_error, not_found_error, Error};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPinsBody {
    saved_pins: Vec<Pin>,
}

#[derive(Serialize, Deserialize)]
pub struct PinBody {
    pin: Pin,
}

// Malformed ids never reach the store, including ids that do not decode as UTF-8.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<PinId, Error> {
    let Path(raw) = path.map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable pin id");
        not_found_error()
    })?;

    PinId::parse(&raw).ok_or_else(|| {
        tracing::debug!(id = %raw, "malformed pin id");
        not_found_error()
    })
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<SavedPinsBody>, Error> {
    let saved_pins = api.list_pins().await?;

    Ok(SavedPinsBody { saved_pins }.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<PinBody>, Error> {
    let id = parse_id(path)?;
    let pin = api.find_pin(id).await.map_err(Error::rejected)?;

    Ok(PinBody { pin }.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<NewPin>, JsonRejection>,
) -> Result<Json<PinBody>, Error> {
    let Json(new_pin) = payload.map_err(invalid_input_error)?;
    new_pin.validate()?;

    let pin = api.create_pin(new_pin).await?;

    Ok(PinBody { pin }.into())
}

pub async fn delete_all(Extension(api): Extension<DynAPI>) -> Result<StatusCode, Error> {
    api.delete_pins().await.map_err(Error::rejected)?;

    Ok(StatusCode::OK)
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<PinBody>, Error> {
    let id = parse_id(path)?;
    let pin = api.delete_pin(id).await.map_err(Error::rejected)?;

    Ok(PinBody { pin }.into())
}
