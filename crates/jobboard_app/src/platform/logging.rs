//! Log sinks for the terminal board. Only records on the `jobboard` target
//! pass; the board itself owns stdout, so terminal logs go to stderr.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "jobboard.log";

/// Chosen by `JOBBOARD_LOG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// `jobboard.log`, truncated at startup.
    File,
    Terminal,
    Both,
}

impl LogDestination {
    fn to_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }

    fn to_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }
}

/// Installs the global logger. A log file that cannot be created degrades
/// to no file sink with a warning on stderr.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut sinks: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.to_terminal() {
        sinks.push(terminal_logger(level, config.clone()));
    }
    if destination.to_file() {
        if let Some(file_logger) = create_file_logger(level, config) {
            sinks.push(file_logger);
        }
    }
    if sinks.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(sinks);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str(board_logging::TARGET)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = Path::new(LOG_FILE);
    File::create(log_path)
        .map(|file| WriteLogger::new(level, config, file))
        .map_err(|err| eprintln!("jobboard: no log file at {}: {}", log_path.display(), err))
        .ok()
}
