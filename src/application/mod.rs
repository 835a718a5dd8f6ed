//! Application layer - assembles the request logger from domain ports.
//!
//! `RequestLog` owns the injected sink, painter and clock and turns a timed
//! handler invocation into one emitted line. The HTTP middleware in `api`
//! only drives it.

pub mod services;

pub use services::{PendingInvocation, RequestLog};
