use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use clap::ArgMatches;
use tracing::Level;

/// `-v` count to the stderr log level; errors only when unset.
const fn get_verbosity_level(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

fn verbosity(matches: &ArgMatches) -> Option<Level> {
    let count = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);
    get_verbosity_level(count)
}

/// Parse the command line, set up logging, and resolve the listing to run.
///
/// # Errors
///
/// Returns an error if telemetry cannot be initialized or the connection options are invalid.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(verbosity(&matches))?;

    dispatch::handler(&matches)
}
