//! # sysmanage (System Management API client)
//!
//! `sysmanage` reads the user, role, and menu listings exposed by the admin
//! backend under `/api/v1/admin/system`.
//!
//! ## Layers
//!
//! - [`system_manage`] holds the request/response shapes and the
//!   [`SystemManageClient`](system_manage::SystemManageClient), which forwards
//!   search parameters to fixed endpoints and returns the typed body untouched.
//! - [`api`] holds the [`Transport`](api::Transport) seam and the
//!   `reqwest`-backed [`HttpTransport`](api::HttpTransport), which owns base URL
//!   resolution, auth headers, timeouts, and the backend's `{code, msg, data}`
//!   envelope.
//! - [`cli`] wires both into the `sysmanage` binary.
//!
//! The client never retries, caches, or rewrites errors. Whatever the transport
//! returns is what the caller gets.

pub mod api;
pub mod cli;
pub mod system_manage;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
