use crate::application::RequestLog;
use crate::infrastructure::LoggerConfig;

#[derive(Clone)]
pub struct AppState {
    pub request_log: RequestLog,
}

impl AppState {
    pub fn new(request_log: RequestLog) -> Self {
        Self { request_log }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(RequestLog::from_config(config))
    }
}
