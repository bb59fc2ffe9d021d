//! inference-service: HTTP gateway in front of a hosted SLM inference endpoint.
//!
//! Accepts a text query, forwards it to the configured SageMaker endpoint with
//! fixed generation parameters, and relays the generated text as JSON.

pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;
