//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. Every error body is a single-key
//! `{"msg": ...}` object.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::MessageDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Services return exactly one of the domain variants (`NotFound`, `AlreadyExists`,
/// `ForeignKeyViolation`) or pass an infrastructure failure through untouched.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested user, entity or favorite does not exist, or a listing is empty.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Favorite with the same `(user_id, entity_id)` key already exists.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    AlreadyExists(String),

    /// Favorite references a user or entity that does not exist.
    ///
    /// Raised when the store's foreign key rejects the insert. Results in 404 Not Found
    /// with the provided message.
    #[error("{0}")]
    ForeignKeyViolation(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `AlreadyExists`
/// - 404 Not Found - For `NotFound` and `ForeignKeyViolation`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) | Self::ForeignKeyViolation(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageDto::new(msg))).into_response()
            }
            Self::AlreadyExists(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageDto::new(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("internal server error")),
        )
            .into_response()
    }
}
