use crate::models;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonError {
    pub error: String,
}

impl JsonError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let error = if message.trim().is_empty() {
            String::from("Internal error")
        } else {
            message
        };

        Self { error }
    }
}

/// One page of products plus the count of every row matching the same filter.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<models::Product>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
