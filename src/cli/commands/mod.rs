pub mod api;
pub mod filters;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("sysmanage")
        .about("System management admin API client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(filters::users())
        .subcommand(filters::roles())
        .subcommand(filters::menu());

    let command = api::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "sysmanage");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("System management admin API client".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_debug_assert() {
        new().debug_assert();
    }

    #[test]
    fn test_global_args_after_subcommand() {
        temp_env::with_vars(
            [
                ("SYSMANAGE_BASE_URL", None::<&str>),
                ("SYSMANAGE_LOG_LEVEL", None),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "sysmanage",
                    "menu",
                    "--base-url",
                    "https://admin.tld",
                    "-vv",
                ]);

                assert_eq!(matches.subcommand_name(), Some(filters::CMD_MENU));
                let (_, sub) = matches.subcommand().unwrap_or(("", &matches));
                assert_eq!(
                    sub.get_one::<String>(api::ARG_BASE_URL).cloned(),
                    Some("https://admin.tld".to_string())
                );
                assert_eq!(sub.get_one::<u8>(logging::ARG_VERBOSITY).copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("SYSMANAGE_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["sysmanage", "menu"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("SYSMANAGE_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["sysmanage".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }
                args.push("menu".to_string());

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["sysmanage"]);
        assert!(result.is_err());
    }
}
