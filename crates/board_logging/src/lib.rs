#![deny(missing_docs)]
//! Shared logging utilities for the job board workspace.
//!
//! Every crate logs through the `board_*` macros so that call sites stay
//! independent of the concrete logger, and tests share one initializer.

/// Log target used by all `board_*` macros.
///
/// The application logger filters on this target to keep third-party crates
/// (reqwest, hyper) at a quieter level than our own messages.
pub const TARGET: &str = "jobboard";

/// Logs a trace-level message under the job board target.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the job board target.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the job board target.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the job board target.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the job board target.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test: it no-ops if a logger is already installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str(TARGET)
        .build();

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
