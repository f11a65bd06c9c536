mod handlers;

use std::future::Future;
use std::net::SocketAddr;

use axum::{extract::Extension, routing::get, Router};

use crate::api::DynAPI;
use crate::error::{server_error, Error};
use crate::server::handlers::saved_pins;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route(
            "/savedpins",
            get(saved_pins::list)
                .post(saved_pins::create)
                .delete(saved_pins::delete_all),
        )
        .route(
            "/savedpins/:id",
            get(saved_pins::find).delete(saved_pins::delete),
        )
        .layer(Extension(api))
}

pub async fn serve<F>(api: DynAPI, addr: SocketAddr, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()>,
{
    let app = router(api);

    let server = axum::Server::try_bind(&addr).map_err(server_error)?;

    tracing::info!("listening on {}", addr);

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(server_error)
}
