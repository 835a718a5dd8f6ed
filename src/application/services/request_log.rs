use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Instant;

use crate::domain::{
    ports::{Clock, LogSink, StatusPainter},
    InvocationRecord, Status,
};
use crate::infrastructure::{
    AnsiPainter, ColorMode, LoggerConfig, PlainPainter, SinkKind, SystemClock, TaggedPainter,
    TracingSink, WriterSink,
};

/// The collaborators of the request logger: where lines go, how the status
/// is rendered, and which clock times the handler.
///
/// Cheap to clone; every clone shares the same sink.
#[derive(Clone)]
pub struct RequestLog {
    sink: Arc<dyn LogSink>,
    painter: Arc<dyn StatusPainter>,
    clock: Arc<dyn Clock>,
}

impl RequestLog {
    pub fn new(sink: Arc<dyn LogSink>, painter: Arc<dyn StatusPainter>) -> Self {
        Self {
            sink,
            painter,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        let painter = painter_for(config.color, config.sink, wants_color(config.sink));
        let sink: Arc<dyn LogSink> = match config.sink {
            SinkKind::Tracing => Arc::new(TracingSink),
            SinkKind::Stdout => Arc::new(WriterSink::stdout()),
            SinkKind::Stderr => Arc::new(WriterSink::stderr()),
        };
        Self::new(sink, painter)
    }

    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_painter(mut self, painter: Arc<dyn StatusPainter>) -> Self {
        self.painter = painter;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Starts timing a request. The returned guard logs exactly once: on
    /// [`PendingInvocation::finish`], or with an unknown status if dropped
    /// unfinished.
    pub fn begin(&self, method: impl Into<String>, path: impl Into<String>) -> PendingInvocation {
        PendingInvocation {
            log: self.clone(),
            method: method.into(),
            path: path.into(),
            start: self.clock.now(),
            finished: false,
        }
    }

    pub fn emit(&self, record: &InvocationRecord) {
        self.sink.write(&record.render(self.painter.as_ref()));
    }
}

/// Picks the status painter for a sink.
///
/// The tracing fmt layer escapes control bytes in messages, so lines bound
/// for `tracing` carry the tier as a `[tier]` tag instead of ANSI color.
fn painter_for(color: ColorMode, sink: SinkKind, terminal: bool) -> Arc<dyn StatusPainter> {
    match (color, sink) {
        (ColorMode::Never, _) => Arc::new(PlainPainter),
        (_, SinkKind::Tracing) => Arc::new(TaggedPainter),
        (ColorMode::Always, _) => Arc::new(AnsiPainter),
        (ColorMode::Auto, _) if terminal => Arc::new(AnsiPainter),
        (ColorMode::Auto, _) => Arc::new(PlainPainter),
    }
}

/// Whether the stream behind `sink` is a terminal that accepts color.
fn wants_color(sink: SinkKind) -> bool {
    match sink {
        SinkKind::Tracing => false,
        SinkKind::Stdout => colored::control::SHOULD_COLORIZE.should_colorize(),
        SinkKind::Stderr => {
            std::env::var_os("NO_COLOR").is_none()
                && std::env::var("CLICOLOR").map_or(true, |v| v != "0")
                && io::stderr().is_terminal()
        }
    }
}

impl Default for RequestLog {
    fn default() -> Self {
        Self::from_config(&LoggerConfig::default())
    }
}

pub struct PendingInvocation {
    log: RequestLog,
    method: String,
    path: String,
    start: Instant,
    finished: bool,
}

impl PendingInvocation {
    pub fn finish(mut self, status: Status) -> InvocationRecord {
        self.complete(status)
    }

    fn complete(&mut self, status: Status) -> InvocationRecord {
        self.finished = true;
        let end = self.log.clock.now();
        let record = InvocationRecord::new(
            std::mem::take(&mut self.method),
            std::mem::take(&mut self.path),
            status,
            end.saturating_duration_since(self.start),
        );
        self.log.emit(&record);
        record
    }
}

impl Drop for PendingInvocation {
    fn drop(&mut self) {
        if !self.finished {
            self.complete(Status::Unknown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tier;
    use crate::infrastructure::sink::capture::capture_logs;
    use crate::infrastructure::{MemorySink, SteppingClock};
    use std::time::{Duration, Instant};

    struct FrozenClock(Instant);

    impl Clock for FrozenClock {
        fn now(&self) -> Instant {
            self.0
        }
    }

    fn memory_log(step: Duration) -> (RequestLog, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let log = RequestLog::new(sink.clone(), Arc::new(TaggedPainter))
            .with_clock(Arc::new(SteppingClock::new(step)));
        (log, sink)
    }

    #[test]
    fn test_finish_emits_one_line() {
        let (log, sink) = memory_log(Duration::from_millis(5));

        let record = log.begin("GET", "/users/42").finish(Status::Code(200));

        assert_eq!(record.elapsed, Duration::from_millis(5));
        assert_eq!(record.tier(), Tier::Success);
        assert_eq!(sink.lines(), vec!["GET /users/42 200[success] 5ms"]);
    }

    #[test]
    fn test_drop_emits_unknown() {
        let (log, sink) = memory_log(Duration::from_millis(2));

        let pending = log.begin("POST", "/upload");
        drop(pending);

        assert_eq!(sink.lines(), vec!["POST /upload unknown[error] 2ms"]);
    }

    #[test]
    fn test_elapsed_is_never_negative() {
        let sink = Arc::new(MemorySink::new());
        let log = RequestLog::new(sink.clone(), Arc::new(PlainPainter))
            .with_clock(Arc::new(FrozenClock(Instant::now())));

        let record = log.begin("GET", "/").finish(Status::Code(204));

        assert_eq!(record.elapsed, Duration::ZERO);
        assert_eq!(sink.lines(), vec!["GET / 204 0ns"]);
    }

    #[test]
    fn test_system_clock_measures_real_time() {
        let sink = Arc::new(MemorySink::new());
        let log = RequestLog::new(sink.clone(), Arc::new(PlainPainter));

        let pending = log.begin("GET", "/slow");
        std::thread::sleep(Duration::from_millis(10));
        let record = pending.finish(Status::Code(200));

        assert!(record.elapsed >= Duration::from_millis(10));
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_with_painter_replaces_rendering() {
        let (log, sink) = memory_log(Duration::from_millis(1));
        let log = log.with_painter(Arc::new(AnsiPainter));

        log.begin("GET", "/crash").finish(Status::Code(503));

        assert_eq!(sink.lines(), vec!["GET /crash \x1b[31m503\x1b[0m 1ms"]);
    }

    #[test]
    fn test_from_config_never_is_plain() {
        let sink = Arc::new(MemorySink::new());
        let config = LoggerConfig {
            color: ColorMode::Never,
            sink: SinkKind::Tracing,
        };
        let log = RequestLog::from_config(&config)
            .with_sink(sink.clone())
            .with_clock(Arc::new(SteppingClock::new(Duration::from_millis(3))));

        log.begin("POST", "/login").finish(Status::Code(401));

        assert_eq!(sink.lines(), vec!["POST /login 401 3ms"]);
    }

    fn painted(painter: Arc<dyn StatusPainter>) -> String {
        painter.paint(Status::Code(503), Tier::Error)
    }

    #[test]
    fn test_tracing_sink_never_gets_ansi() {
        for color in [ColorMode::Auto, ColorMode::Always] {
            for terminal in [true, false] {
                let painter = painter_for(color, SinkKind::Tracing, terminal);
                assert_eq!(painted(painter), "503[error]");
            }
        }
        let painter = painter_for(ColorMode::Never, SinkKind::Tracing, true);
        assert_eq!(painted(painter), "503");
    }

    #[test]
    fn test_always_colors_writer_sinks() {
        for sink in [SinkKind::Stdout, SinkKind::Stderr] {
            let painter = painter_for(ColorMode::Always, sink, false);
            assert_eq!(painted(painter), "\x1b[31m503\x1b[0m");
        }
    }

    #[test]
    fn test_auto_follows_terminal_for_writer_sinks() {
        for sink in [SinkKind::Stdout, SinkKind::Stderr] {
            assert_eq!(
                painted(painter_for(ColorMode::Auto, sink, true)),
                "\x1b[31m503\x1b[0m"
            );
            assert_eq!(painted(painter_for(ColorMode::Auto, sink, false)), "503");
        }
    }

    #[test]
    fn test_tracing_sink_has_no_terminal() {
        assert!(!wants_color(SinkKind::Tracing));
    }

    #[test]
    fn test_default_config_logs_tagged_line_through_tracing() {
        let out = capture_logs(true, || {
            RequestLog::default()
                .with_clock(Arc::new(SteppingClock::new(Duration::from_millis(1))))
                .begin("GET", "/")
                .finish(Status::Code(200));
        });

        assert!(out.contains("GET / 200[success] 1ms"), "{out}");
        assert!(!out.contains("\\x1b"), "{out}");
    }

    #[test]
    fn test_always_with_tracing_sink_stays_readable() {
        let config = LoggerConfig {
            color: ColorMode::Always,
            sink: SinkKind::Tracing,
        };
        let out = capture_logs(true, || {
            RequestLog::from_config(&config)
                .with_clock(Arc::new(SteppingClock::new(Duration::from_millis(2))))
                .begin("POST", "/login")
                .finish(Status::Code(401));
        });

        assert!(out.contains("POST /login 401[warning] 2ms"), "{out}");
        assert!(!out.contains("\\x1b"), "{out}");
    }
}
