//! Mock endpoint implementation for testing.

use super::{EndpointError, InferenceEndpoint, InferencePayload};
use async_trait::async_trait;
use std::sync::Mutex;

/// Recording mock endpoint.
///
/// Replies to every invocation with a canned response body (or a forced
/// failure) and keeps a log of the payloads it received.
pub struct MockEndpoint {
    response: Option<Vec<u8>>,
    invocations: Mutex<Vec<InferencePayload>>,
}

impl MockEndpoint {
    /// Mock that replies to every invocation with `body`.
    pub fn returning(body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Some(body.into()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails every invocation with a network error.
    pub fn failing() -> Self {
        Self {
            response: None,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Payloads received so far.
    pub fn invocations(&self) -> Vec<InferencePayload> {
        self.invocations.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl InferenceEndpoint for MockEndpoint {
    async fn invoke(&self, payload: &InferencePayload) -> Result<Vec<u8>, EndpointError> {
        self.invocations
            .lock()
            .expect("mock lock poisoned")
            .push(payload.clone());

        match &self.response {
            Some(body) => Ok(body.clone()),
            None => Err(EndpointError::NetworkError(
                "mock endpoint failure".to_string(),
            )),
        }
    }
}
