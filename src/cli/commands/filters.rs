//! `users`, `roles`, and `menu` subcommands and their search filters.
//!
//! Filters are copied into the search params as given; the backend validates them.
//! `--param` values are sent as strings.

use crate::system_manage::{RoleSearchParams, UserSearchParams};
use clap::{builder::ValueParser, Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;

pub const CMD_USERS: &str = "users";
pub const CMD_ROLES: &str = "roles";
pub const CMD_MENU: &str = "menu";

const ARG_PAGE_NUM: &str = "page-num";
const ARG_PAGE_SIZE: &str = "page-size";
const ARG_STATUS: &str = "status";
const ARG_PARAM: &str = "param";

#[must_use]
pub fn validator_key_value() -> ValueParser {
    ValueParser::from(
        move |raw: &str| -> std::result::Result<(String, String), String> {
            match raw.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    Ok((key.trim().to_string(), value.to_string()))
                }
                _ => Err("expected key=value".to_string()),
            }
        },
    )
}

fn paging_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PAGE_NUM)
                .long(ARG_PAGE_NUM)
                .help("Page number")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new(ARG_PAGE_SIZE)
                .long(ARG_PAGE_SIZE)
                .help("Records per page")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(Arg::new(ARG_STATUS).long(ARG_STATUS).help("Status filter"))
        .arg(
            Arg::new(ARG_PARAM)
                .long(ARG_PARAM)
                .help("Extra query parameter, repeatable: --param beginTime=2024-01-01")
                .action(ArgAction::Append)
                .value_parser(validator_key_value()),
        )
}

fn text_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

#[must_use]
pub fn users() -> Command {
    paging_args(Command::new(CMD_USERS).about("List users"))
        .arg(
            Arg::new("user-id")
                .long("user-id")
                .help("User id")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(text_arg("user-name", "User name filter"))
        .arg(text_arg("nick-name", "Nick name filter"))
        .arg(text_arg("user-gender", "Gender filter"))
        .arg(text_arg("user-phone", "Phone number filter"))
        .arg(text_arg("user-email", "Email filter"))
}

#[must_use]
pub fn roles() -> Command {
    paging_args(Command::new(CMD_ROLES).about("List roles"))
        .arg(
            Arg::new("role-id")
                .long("role-id")
                .help("Role id")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(text_arg("role-name", "Role name filter"))
        .arg(text_arg("role-code", "Role code filter"))
        .arg(text_arg("description", "Description filter"))
}

#[must_use]
pub fn menu() -> Command {
    Command::new(CMD_MENU).about("List the menu tree")
}

fn string(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.get_one::<String>(name).cloned()
}

fn extra(matches: &ArgMatches) -> impl Iterator<Item = (String, Value)> + '_ {
    matches
        .get_many::<(String, String)>(ARG_PARAM)
        .into_iter()
        .flatten()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
}

#[must_use]
pub fn user_params(matches: &ArgMatches) -> UserSearchParams {
    UserSearchParams {
        page_num: matches.get_one::<u32>(ARG_PAGE_NUM).copied(),
        page_size: matches.get_one::<u32>(ARG_PAGE_SIZE).copied(),
        user_id: matches.get_one::<i64>("user-id").copied(),
        user_name: string(matches, "user-name"),
        nick_name: string(matches, "nick-name"),
        user_gender: string(matches, "user-gender"),
        user_phone: string(matches, "user-phone"),
        user_email: string(matches, "user-email"),
        status: string(matches, ARG_STATUS),
        extra: extra(matches).collect(),
    }
}

#[must_use]
pub fn role_params(matches: &ArgMatches) -> RoleSearchParams {
    RoleSearchParams {
        page_num: matches.get_one::<u32>(ARG_PAGE_NUM).copied(),
        page_size: matches.get_one::<u32>(ARG_PAGE_SIZE).copied(),
        role_id: matches.get_one::<i64>("role-id").copied(),
        role_name: string(matches, "role-name"),
        role_code: string(matches, "role-code"),
        description: string(matches, "description"),
        status: string(matches, ARG_STATUS),
        extra: extra(matches).collect(),
    }
}
