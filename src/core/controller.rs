use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

// ErrorResponse is the body of every failed request
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self { error: error.to_string() }
    }
}

pub type ServerError = (StatusCode, Json<ErrorResponse>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    CommandError::from(LibraryError::from(err)).into()
}

pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServerError> {
    serde_json::from_slice(body).map_err(json_to_server_error)
}

pub fn status_of(err: &CommandError) -> StatusCode {
    match err {
        CommandError::DuplicateKey { .. } => StatusCode::CONFLICT,
        CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
        CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
        CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
    }
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        (status_of(&err), Json(ErrorResponse::new(err.message())))
    }
}
