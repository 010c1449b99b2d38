use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single-key body used by favorite mutations and by every error response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
