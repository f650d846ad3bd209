use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
        }
    }
}

/// Installs a compact `[LEVEL] message` logger on stderr.
///
/// No timestamps, targets or colours, so log lines interleave cleanly with the
/// calculator's own output. Must be called at most once per process.
pub fn init(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer().without_time()
                                                .with_target(false)
                                                .with_level(true)
                                                .with_ansi(false)
                                                .with_writer(std::io::stderr)
                                                .compact()
                                                .with_filter(filter);

    Registry::default().with(layer).init();
}
