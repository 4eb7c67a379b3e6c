//! # ドメイン層エラー定義
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須フィールド欠落・不正なペイロード |
//! | `NotFound` | 404 Not Found | 参照先ドキュメントが存在しない |
//! | `Forbidden` | 403 Forbidden | ゲートチェック失敗（未認証ビジネス、非管理者） |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// メッセージはそのままクライアントへ返される自由記述の文字列。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// リクエストペイロードの検証失敗
    #[error("{0}")]
    Validation(String),

    /// 参照先エンティティが存在しない
    #[error("{entity_type} not found")]
    NotFound {
        /// エンティティの種類（"Business" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },

    /// ゲートチェックの失敗（認可エラー）
    #[error("{0}")]
    Forbidden(String),
}
