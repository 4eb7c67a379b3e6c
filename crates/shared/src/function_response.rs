//! # Function レスポンスエンベロープ
//!
//! すべてのエンドポイントは `success` フラグを持つ JSON オブジェクトを返す。
//!
//! - 成功: `{ "success": true, "message": "...", ...追加フィールド }`
//! - 失敗: `{ "success": false, "error": "..." }`
//!
//! エラー詳細は自由記述のメッセージであり、機械可読なコードは持たない。

use serde::{Deserialize, Serialize};

/// 成功レスポンス
///
/// `extra` はエンドポイントごとの追加フィールド（`stintId` など）で、
/// `#[serde(flatten)]` によりトップレベルに展開される。
///
/// ```
/// use serde::Serialize;
/// use stintboard_shared::SuccessResponse;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Created {
///     stint_id: String,
/// }
///
/// let response = SuccessResponse::with("作成しました", Created {
///     stint_id: "s-1".to_string(),
/// });
/// assert!(response.success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse<T = NoExtra> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra:   T,
}

/// 追加フィールドなし
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoExtra {}

impl SuccessResponse<NoExtra> {
    /// メッセージのみの成功レスポンスを作成する
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            extra:   NoExtra {},
        }
    }
}

impl<T> SuccessResponse<T> {
    /// メッセージと追加フィールドを持つ成功レスポンスを作成する
    pub fn with(message: impl Into<String>, extra: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            extra,
        }
    }

    /// メッセージを持たず、追加フィールドのみの成功レスポンスを作成する
    pub fn data(extra: T) -> Self {
        Self {
            success: true,
            message: None,
            extra,
        }
    }
}

/// 失敗レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error:   String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error:   error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Created {
        application_id: String,
    }

    #[test]
    fn test_messageのみの成功レスポンスはextraを出力しない() {
        let response = SuccessResponse::message("Data added successfully to users");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            json!({ "success": true, "message": "Data added successfully to users" })
        );
    }

    #[test]
    fn test_withで追加フィールドがトップレベルに展開される() {
        let response = SuccessResponse::with(
            "Application submitted successfully",
            Created {
                application_id: "app-1".to_string(),
            },
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            json!({
                "success": true,
                "message": "Application submitted successfully",
                "applicationId": "app-1"
            })
        );
    }

    #[test]
    fn test_dataはmessageを省略する() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AdminFlag {
            is_admin: bool,
        }

        let response = SuccessResponse::data(AdminFlag { is_admin: true });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, json!({ "success": true, "isAdmin": true }));
    }

    #[test]
    fn test_失敗レスポンスはsuccess_falseとerrorを持つ() {
        let json = serde_json::to_value(FailureResponse::new("Invalid user data")).unwrap();

        assert_eq!(json, json!({ "success": false, "error": "Invalid user data" }));
    }
}
