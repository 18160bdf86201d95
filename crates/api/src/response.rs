//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "msg": ... }` body used for delete confirmations and not-found errors.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn not_found(entity: &str) -> Self {
        Self {
            msg: format!("{entity} not found"),
        }
    }

    pub fn removed(entity: &str) -> Self {
        Self {
            msg: format!("{entity} removed"),
        }
    }
}
