//! Logging configuration.
//!
//! Everything goes to stderr so it never mixes with the formatted output on stdout.
//! Quiet by default: only errors show unless `-v` is given.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Map the `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Initialize terminal logging on stderr.
pub fn init(verbosity: u8) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off) // Don't show thread IDs
        .set_target_level(LevelFilter::Off) // Don't show module targets
        .build();

    if TermLogger::init(
        level_for(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Warning: Logger already initialized");
    }
}
