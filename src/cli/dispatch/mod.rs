//! Maps validated CLI arguments to the action to run.

use crate::cli::actions::Action;
use crate::cli::commands::{api, filters};
use anyhow::{anyhow, Result};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if connection options are missing or invalid, or if no
/// known subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing subcommand"))?;

    // global args are propagated into the subcommand matches
    let api = api::Options::parse(sub_m)?;

    match name {
        filters::CMD_USERS => Ok(Action::Users {
            api,
            params: filters::user_params(sub_m),
        }),
        filters::CMD_ROLES => Ok(Action::Roles {
            api,
            params: filters::role_params(sub_m),
        }),
        filters::CMD_MENU => Ok(Action::Menu { api }),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}
