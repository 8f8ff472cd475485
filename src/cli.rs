//! Helpers shared by the command line tools

use std::process;

use clap::Parser;
use log::LevelFilter;

/// Parse command line arguments, exiting with status 1 on bad usage
///
/// `--help` and `--version` still exit with status 0.
pub fn parse_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        process::exit(code)
    })
}

/// Log to stderr, at debug level when `verbose`, otherwise as `RUST_LOG` says
/// with warnings shown by default
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
