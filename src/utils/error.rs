use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::Entity;
use crate::utils::response::ErrorEnvelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidSeed(_) | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::RouteNotFound(_) => "ROUTE_NOT_FOUND",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::InvalidSeed(_) => "INVALID_SEED",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::NotFound { entity, id } => {
                warn!(%entity, %id, "Record not found");
            }
            AppError::RouteNotFound(path) => {
                warn!(%path, "Route not found");
            }
            AppError::Config(msg) | AppError::InvalidSeed(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Io(e) => {
                error!(error = ?e, "I/O error");
            }
            AppError::Json(e) => {
                error!(error = ?e, "JSON error");
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::Io(_) => "An I/O error occurred".to_string(),
            _ => self.to_string(),
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        self.log();

        async_graphql::Error::new(self.public_message()).extend_with(|_, ext| {
            ext.set("code", self.code().to_string());
            if let AppError::NotFound { entity, id } = self {
                ext.set("entity", entity.as_str().to_string());
                ext.set("id", id.clone());
            }
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        ErrorEnvelope::new(self.status_code(), self.code(), self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = AppError::not_found(Entity::Location, "abc");
        assert_eq!(err.to_string(), "Location not found: abc");
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_graphql_extensions_carry_entity_and_id() {
        let err = AppError::not_found(Entity::Participant, "p-1").extend();
        assert_eq!(err.message, "Participant not found: p-1");

        let ext = serde_json::to_value(err.extensions.expect("extensions set")).unwrap();
        assert_eq!(ext["code"], "NOT_FOUND");
        assert_eq!(ext["entity"], "Participant");
        assert_eq!(ext["id"], "p-1");
    }

    #[test]
    fn test_io_details_are_hidden() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "/secret/path/seed.json",
        ));
        assert_eq!(err.public_message(), "An I/O error occurred");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
