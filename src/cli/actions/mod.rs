pub mod list;

use crate::cli::commands::api::Options;
use crate::system_manage::{RoleSearchParams, UserSearchParams};
use anyhow::Result;

#[derive(Debug)]
pub enum Action {
    Users {
        api: Options,
        params: UserSearchParams,
    },
    Roles {
        api: Options,
        params: RoleSearchParams,
    },
    Menu {
        api: Options,
    },
}

impl Action {
    /// Execute the action and print its result to stdout.
    ///
    /// # Errors
    /// Returns an error if the transport cannot be built or the request fails.
    pub async fn execute(self) -> Result<()> {
        let output = list::execute(self).await?;
        println!("{output}");
        Ok(())
    }
}
