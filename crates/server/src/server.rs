use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{ServerError, campaigns};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn not_found() -> ServerError {
    ServerError::PathNotFound
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/campaigns", get(campaigns::list))
        .route("/campaign", post(campaigns::campaign_new))
        .route(
            "/campaign/{campaign_id}",
            get(campaigns::get)
                .put(campaigns::campaign_update)
                .delete(campaigns::campaign_delete),
        )
        .fallback(not_found)
        .with_state(state)
}

/// Build the HTTP application around an engine.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}
