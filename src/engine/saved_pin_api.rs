use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{types::Json, Executor, Row};

use crate::{
    api::SavedPinAPI,
    entities::{NewPin, Pin, PinId},
    error::{not_found_error, Error},
};

#[async_trait]
impl SavedPinAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_pins(&self) -> Result<Vec<Pin>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut results = conn.fetch(sqlx::query("SELECT data FROM saved_pins ORDER BY seq"));

        let mut pins = Vec::new();
        while let Some(row) = results.try_next().await? {
            let Json(pin): Json<Pin> = row.try_get("data")?;
            pins.push(pin);
        }

        Ok(pins)
    }

    #[tracing::instrument(skip(self))]
    async fn find_pin(&self, id: PinId) -> Result<Pin, Error> {
        let mut conn = self.pool.acquire().await?;

        let Json(pin): Json<Pin> = conn
            .fetch_optional(
                sqlx::query("SELECT data FROM saved_pins WHERE id = $1").bind(id.as_uuid()),
            )
            .await?
            .ok_or_else(not_found_error)?
            .try_get("data")?;

        Ok(pin)
    }

    #[tracing::instrument(skip(self))]
    async fn create_pin(&self, new_pin: NewPin) -> Result<Pin, Error> {
        let pin = Pin::new(new_pin);

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO saved_pins (id, data) VALUES ($1, $2)")
                .bind(pin.id.as_uuid())
                .bind(Json(&pin)),
        )
        .await?;

        Ok(pin)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_pins(&self) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn.execute(sqlx::query("DELETE FROM saved_pins")).await?;

        tracing::info!(removed = result.rows_affected(), "saved pins cleared");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_pin(&self, id: PinId) -> Result<Pin, Error> {
        let mut conn = self.pool.acquire().await?;

        let Json(pin): Json<Pin> = conn
            .fetch_optional(
                sqlx::query("DELETE FROM saved_pins WHERE id = $1 RETURNING data")
                    .bind(id.as_uuid()),
            )
            .await?
            .ok_or_else(not_found_error)?
            .try_get("data")?;

        Ok(pin)
    }
}
