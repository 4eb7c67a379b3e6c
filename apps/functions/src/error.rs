//! # Functions エラー定義
//!
//! エンドポイント共通のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは常に `{ "success": false, "error": "..." }`。
//! `error` は自由記述のメッセージで、機械可読なコードは持たない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use stintboard_domain::DomainError;
use stintboard_infra::InfraError;
use stintboard_shared::FailureResponse;
use thiserror::Error;

/// Functions で発生するエラー
#[derive(Debug, Error)]
pub enum FunctionError {
    /// 不正なリクエスト（必須フィールド欠落など）
    #[error("{0}")]
    BadRequest(String),

    /// 参照先が見つからない
    #[error("{0}")]
    NotFound(String),

    /// ゲートチェック失敗
    #[error("{0}")]
    Forbidden(String),

    /// ストア操作の失敗
    #[error("{0}")]
    Store(#[from] InfraError),
}

impl From<DomainError> for FunctionError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::BadRequest(msg),
            DomainError::NotFound { .. } => Self::NotFound(err.to_string()),
            DomainError::Forbidden(msg) => Self::Forbidden(msg),
        }
    }
}

impl FunctionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Store(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "ストア操作に失敗"
                );
            }
            other => tracing::debug!(status = status.as_u16(), error = %other, "リクエストを拒否"),
        }

        (status, Json(FailureResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::validation(
        DomainError::Validation("Invalid user data".to_string()),
        StatusCode::BAD_REQUEST,
        "Invalid user data"
    )]
    #[case::not_found(
        DomainError::NotFound { entity_type: "Business", id: "biz-1".to_string() },
        StatusCode::NOT_FOUND,
        "Business not found"
    )]
    #[case::forbidden(
        DomainError::Forbidden("Unauthorized: Not an admin".to_string()),
        StatusCode::FORBIDDEN,
        "Unauthorized: Not an admin"
    )]
    fn test_ドメインエラーがステータスとメッセージに変換される(
        #[case] domain_error: DomainError,
        #[case] expected_status: StatusCode,
        #[case] expected_message: &str,
    ) {
        let err = FunctionError::from(domain_error);

        assert_eq!(err.status(), expected_status);
        assert_eq!(err.to_string(), expected_message);
    }

    #[test]
    fn test_ストアエラーは500になる() {
        let err = FunctionError::from(InfraError::dynamo_db("PutItem 失敗"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "DynamoDB エラー: PutItem 失敗");
    }

    #[tokio::test]
    async fn test_レスポンスボディはsuccess_falseとerrorを持つ() {
        let response = FunctionError::BadRequest("Invalid stint data".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Invalid stint data" })
        );
    }
}
