use api_types::campaign::Detail;
use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{app, run_with_listener};

mod campaigns;
mod server;

pub enum ServerError {
    Engine(EngineError),
    /// The request body could not be turned into the expected type.
    InvalidPayload(String),
    PathNotFound,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::CampaignNotFound(_) => StatusCode::NOT_FOUND,
        // request bodies are rejected by serde first, this covers direct parsing
        EngineError::InvalidStatus(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::InvalidRecord(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::InvalidRecord(reason) => {
            tracing::error!("stored campaign cannot be read: {reason}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::InvalidPayload(err) => (StatusCode::UNPROCESSABLE_ENTITY, err),
            ServerError::PathNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };

        (status, Json(Detail { detail })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidPayload(value.body_text())
    }
}
