//! Client for the system management listing endpoints. These functions keep
//! endpoint paths centralized and assume the backend enforces authorization
//! and validates filters.

use crate::api::{ApiError, GetRequest, Transport};
use crate::system_manage::types::{MenuEntry, RoleList, RoleSearchParams, UserList, UserSearchParams};
use tracing::instrument;

pub const USER_LIST_PATH: &str = "/api/v1/admin/system/user/list";
pub const ROLE_LIST_PATH: &str = "/api/v1/admin/system/role/list";
pub const MENU_LIST_PATH: &str = "/api/v1/admin/system/menu/list";

#[derive(Debug, Clone)]
pub struct SystemManageClient<T> {
    transport: T,
}

impl<T: Transport> SystemManageClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetches one page of users matching `params`.
    ///
    /// # Errors
    /// Returns the transport's error unchanged.
    #[instrument(skip(self))]
    pub async fn list_users(&self, params: &UserSearchParams) -> Result<UserList, ApiError> {
        self.transport
            .get(GetRequest::with_params(USER_LIST_PATH, params))
            .await
    }

    /// Fetches one page of roles matching `params`.
    ///
    /// # Errors
    /// Returns the transport's error unchanged.
    #[instrument(skip(self))]
    pub async fn list_roles(&self, params: &RoleSearchParams) -> Result<RoleList, ApiError> {
        self.transport
            .get(GetRequest::with_params(ROLE_LIST_PATH, params))
            .await
    }

    /// Fetches the menu tree.
    ///
    /// # Errors
    /// Returns the transport's error unchanged.
    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> Result<Vec<MenuEntry>, ApiError> {
        self.transport.get(GetRequest::new(MENU_LIST_PATH)).await
    }
}
