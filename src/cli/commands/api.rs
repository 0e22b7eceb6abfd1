//! Connection options shared by every subcommand.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_TOKEN: &str = "token";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BASE_URL)
                .short('u')
                .long(ARG_BASE_URL)
                .help("Admin API base URL, example: https://admin.tld:9099")
                .env("SYSMANAGE_BASE_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .short('t')
                .long(ARG_TOKEN)
                .help("Bearer token sent in the Authorization header")
                .env("SYSMANAGE_TOKEN")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .default_value("10")
                .env("SYSMANAGE_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..=300)),
        )
}

#[derive(Debug, Clone)]
pub struct Options {
    pub base_url: String,
    pub token: Option<SecretString>,
    pub timeout: Duration,
}

impl Options {
    /// Read connection options from the parsed arguments.
    ///
    /// # Errors
    /// Returns an error if the base URL is missing or is not an http(s) URL.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let base_url = matches
            .get_one::<String>(ARG_BASE_URL)
            .cloned()
            .context("missing required argument: --base-url")?;

        let parsed = Url::parse(&base_url).context("invalid SYSMANAGE_BASE_URL")?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!(
                "invalid SYSMANAGE_BASE_URL: unsupported scheme {}",
                parsed.scheme()
            );
        }

        let token = matches
            .get_one::<String>(ARG_TOKEN)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(SecretString::from);

        let timeout = Duration::from_secs(matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(10));

        Ok(Self {
            base_url,
            token,
            timeout,
        })
    }
}
