use std::time::Duration;

use super::{Status, Tier};
use crate::domain::ports::StatusPainter;

/// Everything needed to log one request, populated once the handler is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRecord {
    pub method: String,
    pub path: String,
    pub status: Status,
    pub elapsed: Duration,
}

impl InvocationRecord {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        status: Status,
        elapsed: Duration,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            status,
            elapsed,
        }
    }

    pub fn tier(&self) -> Tier {
        self.status.tier()
    }

    /// Renders `<METHOD> <PATH> <STATUS> <DURATION>`.
    pub fn render(&self, painter: &dyn StatusPainter) -> String {
        format!(
            "{} {} {} {:?}",
            self.method,
            self.path,
            painter.paint(self.status, self.tier()),
            self.elapsed
        )
    }
}
