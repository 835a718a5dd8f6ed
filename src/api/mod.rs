pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::{request_logger, wrap, RequestLogger, RequestLoggerLayer};
pub use routes::create_router;
pub use state::AppState;
