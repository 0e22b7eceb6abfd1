//! Request and response shapes for the system management endpoints.
//!
//! Search params are serialized into the query string exactly as set: unset
//! fields are skipped and `extra` entries are sent under their own keys with
//! their JSON scalar value. Response shapes model every key under its own
//! name and keep the rest in `extra`, so a response serializes back to the
//! body the backend sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl UserSearchParams {
    /// Adds a filter the typed fields do not cover. Numbers and booleans are
    /// sent as such.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RoleSearchParams {
    /// Adds a filter the typed fields do not cover.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// One page of records.
///
/// Both the `{records, current, size}` shape and the backend's
/// `{rows, pageNum, pageSize, hasNext}` page model are read; each key stays
/// under the name it arrived with. Use [`PageResult::items`] and
/// [`PageResult::total`] to read either shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> PageResult<T> {
    /// Records of this page, from `records` or else `rows`.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.records
            .as_deref()
            .or(self.rows.as_deref())
            .unwrap_or(&[])
    }

    /// Total record count, zero when the backend omits it.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }

    /// Current page number, from `current` or else `pageNum`.
    #[must_use]
    pub fn page(&self) -> Option<u64> {
        self.current.or(self.page_num)
    }
}

pub type UserList = PageResult<UserListItem>;
pub type RoleList = PageResult<RoleListItem>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A navigable route/permission node of the admin UI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MenuMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MenuEntry {
    /// Child entries, empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[MenuEntry] {
        self.children.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.meta.as_ref()?.title.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hide: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_iframe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_list: Option<Vec<AuthMark>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A button-level permission attached to a menu entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthMark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_mark: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_params_skip_unset_fields() {
        let params = UserSearchParams {
            page_num: Some(1),
            page_size: Some(20),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"pageNum": 1, "pageSize": 20})
        );
    }

    #[test]
    fn extra_params_keep_their_keys_and_types() {
        let params = RoleSearchParams::default()
            .with_param("page", 1)
            .with_param("beginTime", "2024-01-01")
            .with_param("withDeleted", false);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"page": 1, "beginTime": "2024-01-01", "withDeleted": false})
        );
    }

    #[test]
    fn backend_page_model_is_accepted() {
        let body = json!({
            "rows": [{"userId": 7, "userName": "admin", "deptName": "R&D"}],
            "pageNum": 1,
            "pageSize": 10,
            "total": 1,
            "hasNext": false
        });
        let page: UserList = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(page.total(), 1);
        assert_eq!(page.page(), Some(1));
        assert_eq!(page.page_size, Some(10));
        assert_eq!(page.has_next, Some(false));
        assert_eq!(page.items()[0].user_id, Some(7));
        assert!(page.items()[0].id.is_none());
        assert_eq!(page.items()[0].user_name.as_deref(), Some("admin"));
        assert_eq!(page.items()[0].extra.get("deptName"), Some(&json!("R&D")));
        assert_eq!(serde_json::to_value(&page).unwrap(), body);
    }

    #[test]
    fn empty_page() {
        let page: RoleList = serde_json::from_value(json!({"records": [], "total": 0})).unwrap();
        assert!(page.items().is_empty());
        assert_eq!(page.total(), 0);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"records": [], "total": 0})
        );
    }

    #[test]
    fn page_keeps_keys_it_does_not_model() {
        let body = json!({"records": [], "total": 0, "pages": 3, "summary": {"active": 2}});
        let page: UserList = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(page.extra.get("pages"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&page).unwrap(), body);

        let body = json!({"list": [], "total": 0});
        let page: UserList = serde_json::from_value(body.clone()).unwrap();
        assert!(page.items().is_empty());
        assert_eq!(serde_json::to_value(&page).unwrap(), body);
    }

    #[test]
    fn user_with_id_and_user_id() {
        let body = json!({"id": 1, "userId": 1, "userRoles": []});
        let user: UserListItem = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(user.id, Some(1));
        assert_eq!(user.user_id, Some(1));
        assert_eq!(user.user_roles, Some(Vec::new()));
        assert_eq!(serde_json::to_value(&user).unwrap(), body);
    }

    #[test]
    fn menu_entry_without_meta_stays_without_meta() {
        let body = json!([{"path": "/x"}, {"path": "/y", "meta": {}, "children": []}]);
        let menu: Vec<MenuEntry> = serde_json::from_value(body.clone()).unwrap();

        assert!(menu[0].meta.is_none());
        assert_eq!(menu[0].title(), None);
        assert!(menu[1].children().is_empty());
        assert_eq!(serde_json::to_value(&menu).unwrap(), body);
    }

    #[test]
    fn menu_tree_keeps_unknown_fields() {
        let body = json!([{
            "path": "/system",
            "name": "System",
            "component": "/index/index",
            "meta": {"title": "menus.system.title", "icon": "ri:user-3-line", "fixedTab": true},
            "children": [{
                "path": "user",
                "name": "User",
                "meta": {
                    "title": "menus.system.user",
                    "keepAlive": true,
                    "roles": ["R_SUPER", "R_ADMIN"],
                    "authList": [{"title": "新增", "authMark": "add", "sort": 1}]
                }
            }]
        }]);
        let menu: Vec<MenuEntry> = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].title(), Some("menus.system.title"));
        let meta = menu[0].meta.as_ref().unwrap();
        assert_eq!(meta.extra.get("fixedTab"), Some(&json!(true)));

        let child = &menu[0].children()[0];
        assert_eq!(child.path, "user");
        let meta = child.meta.as_ref().unwrap();
        assert_eq!(meta.keep_alive, Some(true));
        assert_eq!(
            meta.roles.as_deref(),
            Some(&["R_SUPER".to_string(), "R_ADMIN".to_string()][..])
        );
        let auth = &meta.auth_list.as_ref().unwrap()[0];
        assert_eq!(auth.auth_mark.as_deref(), Some("add"));
        assert_eq!(auth.extra.get("sort"), Some(&json!(1)));

        assert_eq!(serde_json::to_value(&menu).unwrap(), body);
    }
}
