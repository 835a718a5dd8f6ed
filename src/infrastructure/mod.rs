pub mod clock;
pub mod config;
pub mod painter;
pub mod sink;

pub use clock::{SteppingClock, SystemClock};
pub use config::{ColorMode, LoggerConfig, ServerConfig, SinkKind};
pub use painter::{AnsiPainter, PlainPainter, TaggedPainter};
pub use sink::{MemorySink, TracingSink, WriterSink};
