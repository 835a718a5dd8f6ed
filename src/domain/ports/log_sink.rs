/// Destination of formatted request lines.
///
/// Called once per request, possibly from many tasks at once. Implementations
/// serialize their own writes and must not panic on I/O failure.
pub trait LogSink: Send + Sync {
    fn write(&self, line: &str);
}
