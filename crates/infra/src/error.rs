//! # インフラ層エラー定義
//!
//! マネージドサービスとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! convenience constructor でエラーを生成すると、その時点の
//! スパン情報（どのストア操作の中で失敗したか）が自動的に記録される。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::DocumentNotFound { .. } => { /* 更新対象なし */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// DynamoDB エラー
    ///
    /// AWS SDK のエラー型はジェネリクスが深く `#[from]` が困難なため、
    /// 手動で String にマップする。
    #[error("DynamoDB エラー: {0}")]
    DynamoDb(String),

    /// S3 エラー
    #[error("S3 エラー: {0}")]
    S3(String),

    /// 認証サービスエラー
    #[error("認証サービスエラー: {0}")]
    Identity(String),

    /// 更新対象のドキュメントが存在しない
    #[error("更新対象のドキュメントがありません: {collection}/{id}")]
    DocumentNotFound {
        collection: String,
        id:         String,
    },

    /// ストアから読み出した値をドキュメントに変換できない
    #[error("ドキュメントの変換に失敗: {0}")]
    InvalidDocument(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    fn capture(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    // ===== Convenience constructors =====

    pub fn dynamo_db(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::DynamoDb(msg.into()))
    }

    pub fn s3(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::S3(msg.into()))
    }

    pub fn identity(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::Identity(msg.into()))
    }

    pub fn document_not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::DocumentNotFound {
            collection: collection.into(),
            id:         id.into(),
        })
    }

    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::InvalidDocument(msg.into()))
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_dynamo_dbでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_document_store", collection = "users");
            let _enter = span.enter();

            let err = InfraError::dynamo_db("接続失敗");

            assert!(matches!(err.kind(), InfraErrorKind::DynamoDb(msg) if msg == "接続失敗"));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_document_store"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_document_not_foundの表示() {
        let err = InfraError::document_not_found("businesses", "biz-1");

        assert_eq!(
            err.to_string(),
            "更新対象のドキュメントがありません: businesses/biz-1"
        );
    }

    #[test]
    fn test_displayが種別のメッセージを出力する() {
        assert_eq!(
            InfraError::identity("予期しないステータス 500").to_string(),
            "認証サービスエラー: 予期しないステータス 500"
        );
        assert_eq!(InfraError::s3("一覧取得失敗").to_string(), "S3 エラー: 一覧取得失敗");
    }
}
