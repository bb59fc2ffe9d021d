//! SageMaker runtime endpoint client.
//!
//! Invokes a fixed SageMaker inference endpoint over its HTTPS runtime API.
//! Request signing, retries, and deadlines are owned by the deployment
//! platform, not this client.

use super::{EndpointError, InferenceEndpoint, InferencePayload};
use async_trait::async_trait;
use reqwest::Client;

/// Name of the hosted endpoint serving the model.
pub const ENDPOINT_NAME: &str = "huggingface-pytorch-tgi-inference-2025-05-10-12-01-08-253";

/// Region the endpoint is deployed in.
pub const AWS_REGION: &str = "us-east-1";

/// Client for the SageMaker runtime invocation API.
///
/// Created once at startup and shared across invocations.
pub struct SagemakerEndpoint {
    client: Client,
    url: String,
}

impl SagemakerEndpoint {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            url: invocation_url(ENDPOINT_NAME, AWS_REGION),
        }
    }
}

impl Default for SagemakerEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the runtime invocation URL for an endpoint.
fn invocation_url(endpoint_name: &str, region: &str) -> String {
    format!(
        "https://runtime.sagemaker.{}.amazonaws.com/endpoints/{}/invocations",
        region, endpoint_name
    )
}

#[async_trait]
impl InferenceEndpoint for SagemakerEndpoint {
    async fn invoke(&self, payload: &InferencePayload) -> Result<Vec<u8>, EndpointError> {
        tracing::debug!(
            endpoint = ENDPOINT_NAME,
            prompt_len = payload.inputs.len(),
            "Invoking inference endpoint"
        );

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| EndpointError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(EndpointError::ApiError(format!(
                "SageMaker endpoint error {}: {}",
                status, error_text
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| EndpointError::NetworkError(e.to_string()))?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_url_targets_the_configured_endpoint() {
        let url = invocation_url("my-endpoint", "eu-west-1");
        assert_eq!(
            url,
            "https://runtime.sagemaker.eu-west-1.amazonaws.com/endpoints/my-endpoint/invocations"
        );
    }
}
