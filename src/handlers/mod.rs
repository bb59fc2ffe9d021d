//! The inference request handler and its HTTP adapter.
//!
//! [`handle_invocation`] is the whole pipeline: extract the query, invoke the
//! endpoint, unwrap the first generation. The axum [`generate`] handler adapts
//! it to the HTTP surface; fault-to-response mapping lives in
//! [`crate::error::AppError`].

use crate::error::AppError;
use crate::services::endpoint::{
    EndpointError, Generation, GenerationParameters, InferenceEndpoint, InferencePayload,
};
use crate::startup::AppState;
use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Inbound invocation event as delivered by the hosting layer.
#[derive(Debug, Clone, Default)]
pub struct InvocationEvent {
    /// Query-string parameters; `None` when the request carried no query
    /// string at all.
    pub query_string_parameters: Option<HashMap<String, String>>,
}

/// Terminal result of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResult {
    pub status_code: u16,
    /// JSON-encoded generated text.
    pub body: String,
}

/// Failure modes of a single invocation.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("missing request parameter: {0}")]
    MissingParameter(&'static str),

    #[error("inference endpoint invocation failed: {0}")]
    RemoteInvocation(#[from] EndpointError),

    #[error("malformed endpoint response: {0}")]
    MalformedResponse(String),
}

/// Translate one invocation event into one endpoint call and relay the result.
///
/// The `query` parameter is forwarded as-is; emptiness and length are the
/// endpoint's concern. Fails without touching the endpoint when the parameter
/// is absent.
pub async fn handle_invocation(
    event: InvocationEvent,
    endpoint: &dyn InferenceEndpoint,
) -> Result<HandlerResult, HandlerError> {
    let mut params = event
        .query_string_parameters
        .ok_or(HandlerError::MissingParameter("queryStringParameters"))?;

    let query = params
        .remove("query")
        .ok_or(HandlerError::MissingParameter("query"))?;

    let payload = InferencePayload {
        inputs: query,
        parameters: GenerationParameters::default(),
    };

    let raw = endpoint.invoke(&payload).await?;

    let generations: Vec<Generation> = serde_json::from_slice(&raw).map_err(|e| {
        HandlerError::MalformedResponse(format!("invalid generation payload: {}", e))
    })?;

    let generated_text = generations
        .into_iter()
        .next()
        .ok_or_else(|| HandlerError::MalformedResponse("empty generation sequence".to_string()))?
        .generated_text;

    tracing::info!(%generated_text, "inference complete");

    Ok(HandlerResult {
        status_code: 200,
        body: serde_json::Value::String(generated_text).to_string(),
    })
}

/// `GET /generate`: the hosting-layer adapter around [`handle_invocation`].
pub async fn generate(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<HandlerResult, AppError> {
    let query_string_parameters: Option<HashMap<String, String>> = match raw_query {
        Some(raw) => Some(serde_urlencoded::from_str(&raw).map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("invalid query string: {}", e))
        })?),
        None => None,
    };

    let event = InvocationEvent {
        query_string_parameters,
    };

    let result = handle_invocation(event, state.endpoint.as_ref()).await?;
    Ok(result)
}

impl IntoResponse for HandlerResult {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}
