//! Request logging middleware for `tower` / `axum` services.
//!
//! Wraps a handler, times it, and writes one line per request:
//!
//! ```text
//! GET /users/42 200 5.02ms
//! ```
//!
//! The status is highlighted by severity tier (success, redirect, warning,
//! error). The log sink, status painter and clock are injected through
//! [`application::RequestLog`].

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use api::{request_logger, wrap, RequestLogger, RequestLoggerLayer};
pub use application::RequestLog;
pub use domain::{InvocationRecord, LoggerError, Status, Tier};
