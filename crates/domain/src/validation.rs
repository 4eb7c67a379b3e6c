//! # リクエスト検証
//!
//! 受信した JSON ペイロードに必須フィールドが揃っているかを検証する。
//! 副作用（ストアへの書き込み）は検証を通過した後にのみ行う。
//!
//! 検証はキーの存在のみを見る。値が `null` や空文字列でも通過する。

use serde_json::Value;

use crate::{DomainError, document::Document};

/// エンドポイントごとの必須フィールド定義
///
/// ```
/// use serde_json::json;
/// use stintboard_domain::validation::RequestValidator;
///
/// const VALIDATOR: RequestValidator =
///     RequestValidator::new("Invalid application data", &["userId", "stintId"]);
///
/// assert!(VALIDATOR.validate(json!({ "userId": "u1", "stintId": null })).is_ok());
/// assert!(VALIDATOR.validate(json!({ "userId": "u1" })).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator {
    invalid_message: &'static str,
    required:        &'static [&'static str],
}

impl RequestValidator {
    /// `invalid_message` は検証失敗時にクライアントへ返すメッセージ
    pub const fn new(invalid_message: &'static str, required: &'static [&'static str]) -> Self {
        Self {
            invalid_message,
            required,
        }
    }

    /// ペイロードを検証し、ドキュメントとして取り出す
    ///
    /// 以下の場合は [`DomainError::Validation`] を返す:
    /// - JSON オブジェクトではない（配列、文字列、`null` など）
    /// - 空のオブジェクト
    /// - 必須フィールドのいずれかがキーとして存在しない
    pub fn validate(&self, payload: Value) -> Result<Document, DomainError> {
        let Value::Object(document) = payload else {
            return Err(self.invalid());
        };

        if document.is_empty() {
            return Err(self.invalid());
        }

        if !self
            .required
            .iter()
            .all(|field| document.contains_key(*field))
        {
            return Err(self.invalid());
        }

        Ok(document)
    }

    /// ドキュメントキーとして使うフィールドを文字列として取り出す
    ///
    /// キーに使う識別子は文字列でなければならない。
    pub fn string_field<'a>(
        &self,
        document: &'a Document,
        field: &str,
    ) -> Result<&'a str, DomainError> {
        document
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| self.invalid())
    }

    /// 検証失敗エラーを生成する
    pub fn invalid(&self) -> DomainError {
        DomainError::Validation(self.invalid_message.to_string())
    }
}
