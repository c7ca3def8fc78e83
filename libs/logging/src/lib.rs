use log::{LevelFilter, SetLoggerError};

pub fn purple(msg: &str) {
    println!("\x1b[48;5;57m{}\x1b[0m", msg);
}

pub fn pink(msg: &str) {
    println!("\x1b[48;5;132m{}\x1b[0m", msg);
}

/// Starts the global logger. `RUST_LOG` wins over `default_level` when it is set. Fails if a
/// logger is already installed for this process.
pub fn init(default_level: &str) -> Result<(), SetLoggerError> {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(parse_level(default_level));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init()
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}
