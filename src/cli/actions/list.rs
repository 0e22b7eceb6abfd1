use crate::api::{HttpConfig, HttpTransport};
use crate::cli::{actions::Action, commands::api::Options};
use crate::system_manage::SystemManageClient;
use anyhow::{Context, Result};
use tracing::debug;

fn transport(api: Options) -> Result<HttpTransport> {
    let mut config = HttpConfig::new(api.base_url).with_timeout(api.timeout);
    if let Some(token) = api.token {
        config = config.with_token(token);
    }

    HttpTransport::new(config).context("Failed to build HTTP transport")
}

/// Run a listing action and render the response as pretty JSON.
///
/// # Errors
/// Returns an error if the transport cannot be built or the request fails.
pub async fn execute(action: Action) -> Result<String> {
    match action {
        Action::Users { api, params } => {
            let client = SystemManageClient::new(transport(api)?);
            let users = client
                .list_users(&params)
                .await
                .context("Failed to list users")?;
            debug!("users: {} of {}", users.items().len(), users.total());
            Ok(serde_json::to_string_pretty(&users)?)
        }
        Action::Roles { api, params } => {
            let client = SystemManageClient::new(transport(api)?);
            let roles = client
                .list_roles(&params)
                .await
                .context("Failed to list roles")?;
            debug!("roles: {} of {}", roles.items().len(), roles.total());
            Ok(serde_json::to_string_pretty(&roles)?)
        }
        Action::Menu { api } => {
            let client = SystemManageClient::new(transport(api)?);
            let menu = client.list_menu().await.context("Failed to list menu")?;
            debug!("menu entries: {}", menu.len());
            Ok(serde_json::to_string_pretty(&menu)?)
        }
    }
}
