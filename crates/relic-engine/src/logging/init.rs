use std::io::Write;
use std::sync::Once;

/// Line layout used by the logger.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// `env_logger`'s own layout (timestamp, level, target).
    #[default]
    Default,
    /// `LEVEL: message`, one record per line. Fatal bootstrap errors then read
    /// as `ERROR: Window: ...` on the console.
    Console,
}

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "relic_engine=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            format: LogFormat::Default,
        }
    }
}

impl LoggingConfig {
    /// Configuration used by the shipped binary: console layout, default filter.
    pub fn console() -> Self {
        Self {
            format: LogFormat::Console,
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        if config.format == LogFormat::Console {
            builder.format(|buf, record| write_console_line(buf, record));
        }

        builder.init();

        log::debug!("logging initialized");
    });
}

/// Writes a record as `LEVEL: message\n`.
pub(crate) fn write_console_line<W: Write>(out: &mut W, record: &log::Record<'_>) -> std::io::Result<()> {
    writeln!(out, "{}: {}", record.level(), record.args())
}
