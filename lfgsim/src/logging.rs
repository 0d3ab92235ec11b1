// Logging setup for lfgsim.
//
// Thin wrapper over the `tracing` ecosystem: one struct of knobs, one
// guarded init. The simulator logs run lifecycle at INFO, per-iteration
// detail at DEBUG, and degenerate paths at WARN.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Configuration for the simulator's logging output.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level to display.
    pub level: Level,
    /// Whether to include the event's file and line.
    pub show_file_line: bool,
    /// Whether to include thread names.
    pub show_thread_info: bool,
    /// Target filter expressions (e.g. "lfgsim=debug") overriding `level`.
    pub target_filters: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            show_file_line: false,
            show_thread_info: true,
            target_filters: None,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// Safe to call multiple times; only the first call takes effect. An
/// explicit `RUST_LOG` in the environment still wins over `level`.
pub fn init(config: LogConfig) {
    INIT.call_once(|| {
        let filter = match &config.target_filters {
            Some(filters) => EnvFilter::new(filters),
            None => EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(config.level).into())
                .from_env_lossy(),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_file(config.show_file_line)
                    .with_line_number(config.show_file_line)
                    .with_thread_names(config.show_thread_info),
            )
            .init();
    });
}

/// Initializes with default settings (INFO level, console output).
pub fn init_default() {
    init(LogConfig::default());
}

/// Development preset: DEBUG level with file and line info.
pub fn init_development() {
    init(LogConfig {
        level: Level::DEBUG,
        show_file_line: true,
        ..Default::default()
    });
}
