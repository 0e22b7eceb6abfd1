//! Unwrapping of the admin backend's response envelope.
//!
//! Every backend response looks like
//! `{"code": 200, "msg": "...", "success": true, "time": "...", "error_code": "...", ...}`
//! with the payload either under `data` or merged into the top level (paginated
//! listings arrive as `rows`, `pageNum`, `pageSize`, `total`, `hasNext`).

use super::ApiError;
use serde_json::{Map, Value};

/// Envelope code that marks a successful call.
pub const SUCCESS_CODE: i64 = 200;

/// Keys that belong to the envelope itself rather than to the payload.
const META_KEYS: [&str; 5] = ["code", "msg", "success", "time", "error_code"];

/// Extract the payload from an envelope body.
///
/// Bodies without a `code` key are not envelopes and are returned unchanged.
///
/// # Errors
/// Returns `ApiError::Rejected` when the envelope code is not [`SUCCESS_CODE`],
/// and `ApiError::Parse` when `code` is present but not an integer.
pub fn unwrap(body: Value) -> Result<Value, ApiError> {
    let mut object = match body {
        Value::Object(object) => object,
        other => return Ok(other),
    };

    let Some(code) = object.get("code") else {
        return Ok(Value::Object(object));
    };

    let code = code
        .as_i64()
        .ok_or_else(|| ApiError::Parse(format!("Invalid envelope code: {code}")))?;

    if code != SUCCESS_CODE {
        return Err(ApiError::Rejected {
            code,
            message: message(&object),
        });
    }

    if let Some(data) = object.remove("data") {
        return Ok(data);
    }

    for key in META_KEYS {
        object.remove(key);
    }

    Ok(Value::Object(object))
}

fn message(object: &Map<String, Value>) -> String {
    object
        .get("msg")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .unwrap_or("Request rejected.")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_payload_is_returned() {
        let body = json!({
            "code": 200,
            "msg": "操作成功",
            "success": true,
            "data": {"records": [], "total": 0}
        });
        assert_eq!(unwrap(body), Ok(json!({"records": [], "total": 0})));
    }

    #[test]
    fn array_data_payload_is_returned() {
        let body = json!({"code": 200, "msg": "ok", "data": [{"path": "/system"}]});
        assert_eq!(unwrap(body), Ok(json!([{"path": "/system"}])));
    }

    #[test]
    fn top_level_page_is_returned_without_meta_keys() {
        let body = json!({
            "code": 200,
            "msg": "操作成功",
            "success": true,
            "time": "2024-05-01T10:00:00",
            "error_code": "SUCCESS",
            "rows": [{"userId": 1}],
            "pageNum": 1,
            "pageSize": 10,
            "total": 1,
            "hasNext": false
        });
        assert_eq!(
            unwrap(body),
            Ok(json!({
                "rows": [{"userId": 1}],
                "pageNum": 1,
                "pageSize": 10,
                "total": 1,
                "hasNext": false
            }))
        );
    }

    #[test]
    fn non_envelope_body_is_untouched() {
        let body = json!({"records": [], "total": 0});
        assert_eq!(unwrap(body.clone()), Ok(body));

        let array = json!([1, 2, 3]);
        assert_eq!(unwrap(array.clone()), Ok(array));
    }

    #[test]
    fn non_success_code_is_rejected() {
        let body = json!({"code": 401, "msg": "登录信息已过期", "success": false});
        assert_eq!(
            unwrap(body),
            Err(ApiError::Rejected {
                code: 401,
                message: "登录信息已过期".to_string()
            })
        );
    }

    #[test]
    fn rejected_without_message_gets_default() {
        let body = json!({"code": 500, "msg": "  "});
        assert_eq!(
            unwrap(body),
            Err(ApiError::Rejected {
                code: 500,
                message: "Request rejected.".to_string()
            })
        );
    }

    #[test]
    fn non_integer_code_is_a_parse_error() {
        let body = json!({"code": "200", "data": []});
        assert!(matches!(unwrap(body), Err(ApiError::Parse(_))));
    }
}
