//! Inference endpoint abstraction.
//!
//! This module provides a trait-based abstraction over the remote
//! text-generation endpoint, allowing the handler to be exercised against a
//! recording mock, plus the wire types shared by every implementation.

pub mod mock;
pub mod sagemaker;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for endpoint invocations.
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Sampling configuration sent with every invocation.
///
/// The values are fixed for the lifetime of the service; there is no
/// per-request override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub repetition_penalty: f32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 256,
            do_sample: true,
            temperature: 0.3,
            top_p: 0.7,
            top_k: 50,
            repetition_penalty: 1.03,
        }
    }
}

/// Request body for the endpoint: the prompt plus sampling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferencePayload {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

/// One element of the endpoint's response array.
///
/// Only `generated_text` is consumed; sibling fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub generated_text: String,
}

/// A hosted text-generation endpoint.
#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    /// Send one payload and return the raw response body.
    ///
    /// Implementations serialize the payload as UTF-8 JSON and declare
    /// content type `application/json`. Interpretation of the body is the
    /// caller's concern.
    async fn invoke(&self, payload: &InferencePayload) -> Result<Vec<u8>, EndpointError>;
}
