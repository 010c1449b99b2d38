//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors and the resulting response is
//! checked for status and JSON body. `routes` drives the full router instead.

mod user;

use axum::response::Response;
use serde_json::Value;
use test_utils::{builder::TestBuilder, error::TestError, factory};

use crate::server::state::AppState;

/// Builds an `AppState` over a fresh in-memory database with every catalog table.
async fn test_state() -> Result<AppState, TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    Ok(AppState::new(test.db.unwrap()))
}

/// Reads a response body as JSON.
async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
