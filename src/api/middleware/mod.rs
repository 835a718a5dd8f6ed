mod logging;

pub use logging::{request_logger, wrap, RequestLogger, RequestLoggerLayer};
