//! User, role, and menu listings of the admin backend.

pub mod client;
pub mod types;

pub use self::client::SystemManageClient;
pub use self::types::{
    AuthMark, MenuEntry, MenuMeta, PageResult, RoleList, RoleListItem, RoleSearchParams, UserList,
    UserListItem, UserSearchParams,
};
