use crate::domain::{Status, Tier};

/// Renders the status field of a log line for its severity tier.
pub trait StatusPainter: Send + Sync {
    fn paint(&self, status: Status, tier: Tier) -> String;
}
