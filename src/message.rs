//! The body of responses that confirm an action without returning a resource.

use axum::Json;
use serde::{Deserialize, Serialize};

/// A JSON object with a single human readable `message`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// What happened.
    pub message: String,
}

impl Message {
    /// Wrap `message` in a JSON body.
    pub fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}
