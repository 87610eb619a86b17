use log::LevelFilter;

/// Level used when neither `--quiet` nor `--verbose` is given.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        DEFAULT_LEVEL
    }
}

/// Installs the global logger. `RUST_LOG` takes precedence over the flags.
pub fn init(quiet: bool, verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(quiet, verbose))
        .format_target(false)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
}
