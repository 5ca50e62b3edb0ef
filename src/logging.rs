use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Map the number of `-v` flags to a log level
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Set up logging to stderr for the binaries. `RUST_LOG` overrides the level when set.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    SimpleLogger::new()
        .with_level(level_from_verbosity(verbosity))
        .env()
        .init()
}
