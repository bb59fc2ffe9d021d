//! Service-layer components.

pub mod endpoint;
