use std::time::Instant;

/// Source of timestamps around a handler invocation.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}
