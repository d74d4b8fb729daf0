pub mod root;
pub mod auth;
pub mod announcements;
pub mod events;
pub mod gallery;
pub mod activities;
pub mod settings;
pub mod admin;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
