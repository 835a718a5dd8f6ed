mod request_log;

pub use request_log::{PendingInvocation, RequestLog};
