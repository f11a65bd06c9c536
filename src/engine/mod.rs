mod saved_pin_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error};

type Database = Postgres;

#[derive(Debug)]
pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        // saved pin documents (KV store), seq keeps insertion order
        pool.execute(
            "CREATE TABLE IF NOT EXISTS saved_pins (seq BIGSERIAL, id UUID PRIMARY KEY, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self { pool })
    }

    #[tracing::instrument(name = "Engine::close", skip_all)]
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}

impl API for Engine {}
