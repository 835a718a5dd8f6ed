mod clock;
mod log_sink;
mod status_painter;

pub use clock::Clock;
pub use log_sink::LogSink;
pub use status_painter::StatusPainter;
