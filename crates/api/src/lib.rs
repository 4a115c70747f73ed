//! HTTP API: routing, request parsing, and response mapping over the product store.

pub mod app;

/// Address the server binds to. There is no configuration surface for it.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
