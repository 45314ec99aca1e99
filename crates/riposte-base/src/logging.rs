use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// A logger that writes every record to stdout.
pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!(
            "{} [{}] {} - {}",
            time_of_day(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Current UTC time of day as HH:MM:SS.mmm.
fn time_of_day() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    let secs = now.as_secs() % 86400;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        now.subsec_millis()
    )
}

/// Resolve the max log level.
///
/// The RIPOSTE_LOG environment variable wins when set to a known level name.
/// Otherwise debug builds log at Debug and release builds at Info.
fn max_level() -> LevelFilter {
    if let Ok(value) = std::env::var("RIPOSTE_LOG") {
        match value.to_ascii_lowercase().as_str() {
            "off" => return LevelFilter::Off,
            "error" => return LevelFilter::Error,
            "warn" => return LevelFilter::Warn,
            "info" => return LevelFilter::Info,
            "debug" => return LevelFilter::Debug,
            "trace" => return LevelFilter::Trace,
            _ => {}
        }
    }

    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize the global logger with StdoutLogger.
///
/// This can only be called once per process. Subsequent calls are silently
/// ignored.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level());
    }
}
